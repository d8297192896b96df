//! Report formatting and printing utilities.
//!
//! Displays issues in cargo-style format. Kept separate from the analysis so
//! mocklint can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CheckSummary, CommandResult, CommandSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    for issue in &sorted {
        print_issue(issue, writer);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(summary: &CheckSummary) {
    print_success_to(summary, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(summary: &CheckSummary, writer: &mut W) {
    let msg = format!(
        "Checked {} mock {} against {} ({} {}) - no issues found",
        summary.files_checked,
        if summary.files_checked == 1 {
            "file"
        } else {
            "files"
        },
        summary.bundle_name,
        summary.bundle_keys,
        if summary.bundle_keys == 1 {
            "key"
        } else {
            "keys"
        }
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Findings are file-level: no line or column
    let _ = writeln!(writer, "  {} {}", "-->".blue(), issue.location_path());

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "  {} {} {}",
            "=".blue(),
            "hint:".bold().cyan(),
            hint
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            if total_problems == 1 {
                "problem"
            } else {
                "problems"
            },
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

pub fn print(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Check(summary) => {
            report(&result.issues);
            if result.issues.is_empty() {
                print_success(summary);
            } else if result.parse_error_count > 0 {
                eprintln!(
                    "{} {} mock file(s) could not be parsed",
                    "warning:".bold().yellow(),
                    result.parse_error_count
                );
            }
        }
        CommandSummary::Init(summary) => print_init(summary),
    }
}

fn print_init(summary: &InitSummary) {
    if let Some(error) = &summary.error {
        eprintln!("Error: {}", error);
    } else if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
