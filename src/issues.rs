//! Issue types for mock/bundle analysis results.
//!
//! An issue is a checker finding bound to the mock file it came from, plus the
//! severity it is reported with. Each issue carries everything the CLI reporter
//! and the MCP server need to display it.

use enum_dispatch::enum_dispatch;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingI18nKey,
    MissingBundleEntry,
    ParseError,
}

impl Rule {
    /// Parse a rule from its display name (`missing-i18n-key`, ...).
    pub fn from_name(name: &str) -> Option<Rule> {
        match name {
            "missing-i18n-key" => Some(Rule::MissingI18nKey),
            "missing-bundle-entry" => Some(Rule::MissingBundleEntry),
            "parse-error" => Some(Rule::ParseError),
            _ => None,
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MissingI18nKey => write!(f, "missing-i18n-key"),
            Rule::MissingBundleEntry => write!(f, "missing-bundle-entry"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Mock message without an i18n key (hard-coded string).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingI18nKeyIssue {
    pub file_path: String,
    /// Short name of the mock, as shown in the message.
    pub file_identifier: String,
    pub severity: Severity,
}

impl MissingI18nKeyIssue {
    pub fn rule() -> Rule {
        Rule::MissingI18nKey
    }
}

/// Mock references an i18n key the bundle does not define.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingBundleEntryIssue {
    pub file_path: String,
    pub key: String,
    /// Display name of the bundle (e.g. `login.properties`).
    pub bundle_name: String,
    pub severity: Severity,
}

impl MissingBundleEntryIssue {
    pub fn rule() -> Rule {
        Rule::MissingBundleEntry
    }
}

/// Mock file could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// An i18n wiring issue found during analysis.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingI18nKey(MissingI18nKeyIssue),
    MissingBundleEntry(MissingBundleEntryIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }

    pub fn file_path(&self) -> &str {
        self.location_path()
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Trait for types that can be reported to CLI.
///
/// Findings have no line or column; the mock file path is the only location.
#[enum_dispatch]
pub trait Report {
    /// Mock file the issue belongs to.
    fn location_path(&self) -> &str;

    /// Rendered message.
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }
}

impl Report for MissingI18nKeyIssue {
    fn location_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        format!(
            "API mock \"{}\" does not have an i18nKey. Avoid hard-coding English strings.",
            self.file_identifier
        )
    }

    fn report_severity(&self) -> Severity {
        self.severity
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<String> {
        Some("set `messages.value[0].i18n.key` to a key from the translation bundle".to_string())
    }
}

impl Report for MissingBundleEntryIssue {
    fn location_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        format!("\"{}\" is missing from {}.", self.key, self.bundle_name)
    }

    fn report_severity(&self) -> Severity {
        self.severity
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<String> {
        Some(format!(
            "add \"{}\" to {} or list it in `ignoreKeys`",
            self.key, self.bundle_name
        ))
    }
}

impl Report for ParseErrorIssue {
    fn location_path(&self) -> &str {
        &self.file_path
    }

    fn message(&self) -> String {
        format!("Failed to parse mock file: {}", self.error)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: file_path, rule, message
        self.file_path()
            .cmp(other.file_path())
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
