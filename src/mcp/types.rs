use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::issues::{Issue, Report};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetBundleParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanMocksParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Maximum number of items to return (default 20, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip
    pub offset: Option<u32>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub mocks_root: String,
    pub includes: Vec<String>,
    pub ignores: Vec<String>,
    pub bundle: String,
    pub bundle_name: String,
    pub ignore_keys: Vec<String>,
    pub identifier_anchor: Option<String>,
    /// Rule name → level (`error`, `warn`, `off`)
    pub rules: Vec<RuleLevelDto>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuleLevelDto {
    pub rule: String,
    pub level: String,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        let rules = c
            .rules
            .iter()
            .map(|(rule, level)| RuleLevelDto {
                rule: rule.clone(),
                level: level.as_str().to_string(),
            })
            .collect();

        Self {
            mocks_root: c.mocks_root,
            includes: c.includes,
            ignores: c.ignores,
            bundle: c.bundle,
            bundle_name: c.bundle_name,
            ignore_keys: c.ignore_keys,
            identifier_anchor: c.identifier_anchor,
            rules,
        }
    }
}

// ============================================================
// Bundle Types (get_bundle)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BundleInfo {
    pub file_path: String,
    pub bundle_name: String,
    pub key_count: usize,
    /// Keys exempt from bundle coverage, sorted
    pub ignore_keys: Vec<String>,
}

// ============================================================
// Scan Types (scan_mocks)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

/// One reported issue.
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MockIssueItem {
    pub rule: String,
    pub severity: String,
    pub file_path: String,
    pub message: String,
    /// Missing bundle key (missing-bundle-entry only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Mock identifier (missing-i18n-key only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_identifier: Option<String>,
}

impl From<&Issue> for MockIssueItem {
    fn from(issue: &Issue) -> Self {
        let (key, file_identifier) = match issue {
            Issue::MissingBundleEntry(i) => (Some(i.key.clone()), None),
            Issue::MissingI18nKey(i) => (None, Some(i.file_identifier.clone())),
            Issue::ParseError(_) => (None, None),
        };

        Self {
            rule: issue.report_rule().to_string(),
            severity: issue.report_severity().to_string(),
            file_path: issue.location_path().to_string(),
            message: issue.message(),
            key,
            file_identifier,
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanMocksResult {
    pub total_count: usize,
    pub files_checked: usize,
    pub parse_error_count: usize,
    pub items: Vec<MockIssueItem>,
    pub pagination: Pagination,
}
