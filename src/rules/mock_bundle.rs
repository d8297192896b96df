//! Mock/bundle consistency rule.
//!
//! Checks that an API mock's primary message references an i18n key, and
//! that the key is defined in the translation bundle (or explicitly ignored).

use std::collections::HashSet;

use rayon::prelude::*;

use crate::{
    core::{CheckContext, MockDocument, TranslationBundle},
    issues::{Issue, MissingBundleEntryIssue, MissingI18nKeyIssue, Rule},
};

/// Keys exempt from bundle coverage, e.g. keys served from another bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreList(HashSet<String>);

impl IgnoreList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.0.iter().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl<S: Into<String>> FromIterator<S> for IgnoreList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// A defect found in one mock document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// The primary message has no i18n key, so its text is hard-coded.
    MissingI18nKey { file_identifier: String },
    /// The referenced key is neither in the bundle nor ignored.
    MissingBundleEntry { i18n_key: String },
}

/// Check one mock document against a translation bundle.
///
/// Only the first entry of `messages.value` is inspected. Returns at most one
/// finding; a document without messages yields none.
pub fn check_mock_document(
    document: &MockDocument,
    bundle: &TranslationBundle,
    ignore_list: &IgnoreList,
    file_identifier: &str,
) -> Vec<Finding> {
    let Some(entry) = document.primary_message() else {
        return Vec::new();
    };

    let Some(i18n_key) = entry.i18n_key() else {
        return vec![Finding::MissingI18nKey {
            file_identifier: file_identifier.to_string(),
        }];
    };

    if bundle.contains_key(i18n_key) || ignore_list.contains(i18n_key) {
        return Vec::new();
    }

    vec![Finding::MissingBundleEntry {
        i18n_key: i18n_key.to_string(),
    }]
}

/// Run the mock/bundle rule over every parsed mock in the context.
///
/// Findings are bound to their file and given the severity configured for
/// their rule; rules configured as `off` produce nothing.
pub fn check_mock_bundle_issues(ctx: &CheckContext) -> Vec<Issue> {
    let missing_key_severity = ctx.config.rule_level(Rule::MissingI18nKey).severity();
    let missing_entry_severity = ctx.config.rule_level(Rule::MissingBundleEntry).severity();

    let mut issues: Vec<Issue> = ctx
        .documents()
        .par_iter()
        .flat_map_iter(|(file_path, document)| {
            let file_identifier = ctx.file_identifier(file_path);
            check_mock_document(document, &ctx.bundle, &ctx.ignore_list, &file_identifier)
                .into_iter()
                .filter_map(move |finding| match finding {
                    Finding::MissingI18nKey { file_identifier } => {
                        missing_key_severity.map(|severity| {
                            Issue::MissingI18nKey(MissingI18nKeyIssue {
                                file_path: file_path.clone(),
                                file_identifier,
                                severity,
                            })
                        })
                    }
                    Finding::MissingBundleEntry { i18n_key } => {
                        missing_entry_severity.map(|severity| {
                            Issue::MissingBundleEntry(MissingBundleEntryIssue {
                                file_path: file_path.clone(),
                                key: i18n_key,
                                bundle_name: ctx.bundle.name.clone(),
                                severity,
                            })
                        })
                    }
                })
        })
        .collect();

    issues.sort();
    issues
}
