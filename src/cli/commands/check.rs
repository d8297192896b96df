use anyhow::{Ok, Result};
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{CheckSummary, CommandResult, CommandSummary, helper::finish};

use crate::{
    core::CheckContext,
    issues::{Issue, Rule},
    rules::mock_bundle::check_mock_bundle_issues,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    /// Mock message without an i18n key
    #[value(name = "missing-i18n-key")]
    MissingI18nKey,
    /// i18n key not defined in the translation bundle
    #[value(name = "missing-bundle-entry")]
    MissingBundleEntry,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![CheckRule::MissingI18nKey, CheckRule::MissingBundleEntry]
    }

    pub fn rule(self) -> Rule {
        match self {
            CheckRule::MissingI18nKey => Rule::MissingI18nKey,
            CheckRule::MissingBundleEntry => Rule::MissingBundleEntry,
        }
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.args.common)?;
    Ok(run_checks(&ctx, &cmd.checks))
}

/// Run the selected rules (all when `checks` is empty) and collect issues,
/// including one parse error per mock file that could not be parsed.
pub fn run_checks(ctx: &CheckContext, checks: &[CheckRule]) -> CommandResult {
    let selected: Vec<Rule> = if checks.is_empty() {
        CheckRule::all()
    } else {
        checks.to_vec()
    }
    .into_iter()
    .map(CheckRule::rule)
    .collect();

    let mut all_issues: Vec<Issue> = check_mock_bundle_issues(ctx)
        .into_iter()
        .filter(|issue| selected.contains(&issue.rule()))
        .collect();

    all_issues.extend(ctx.parse_errors().iter().cloned().map(Issue::ParseError));

    let summary = CheckSummary {
        files_checked: ctx.files.len(),
        bundle_keys: ctx.bundle.len(),
        bundle_name: ctx.bundle.name.clone(),
    };

    finish(CommandSummary::Check(summary), all_issues, true)
}
