//! Pure formatting functions for terminal output.
//!
//! `render_*` functions build strings and are unit-tested; `display_*`
//! functions print them.

use console::style;

use crate::checks::{CheckReport, RuleOutcome};
use crate::cli::BumpOutcome;
use crate::logo::LogoSummary;
use crate::outcome::ValidationOutcome;
use crate::sanitize::Finding;

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), message);
}

/// Print an unexpected (non-domain) error in red.
pub fn display_unexpected_error(message: &str) {
    eprintln!("{} {}", style("Unexpected error:").red().bold(), message);
}

/// Print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print a failure message with red cross.
pub fn display_failure(message: &str) {
    eprintln!("{} {}", style("✗").red(), message);
}

/// Lines reported after a bump.
pub fn render_bump(outcome: &BumpOutcome) -> Vec<String> {
    let mut lines = vec![
        format!("Current version: {}", outcome.previous),
        format!("New version: {}", outcome.next),
    ];
    if outcome.written {
        lines.push(format!(
            "Version bumped successfully: {} -> {}",
            outcome.previous, outcome.next
        ));
        lines.push(format!("Updated: {}", outcome.path.display()));
    } else {
        lines.push("\nDry run - no changes made".to_string());
    }
    lines
}

pub fn display_bump(outcome: &BumpOutcome) {
    for line in render_bump(outcome) {
        println!("{}", line);
    }
}

pub fn display_validation(outcome: &ValidationOutcome) {
    println!("Current version: {}", outcome.current());
    if let Some(previous) = outcome.previous() {
        println!("Latest git tag: v{}", previous);
    }

    match outcome {
        ValidationOutcome::FirstRelease { .. } => {
            display_status(&outcome.to_string());
            display_success("Version validation passed");
        }
        ValidationOutcome::Incremented { .. } => display_success("Version validation passed"),
        ValidationOutcome::NotIncremented { .. } | ValidationOutcome::NotGreater { .. } => {
            display_failure(&outcome.to_string())
        }
    }
}

/// One line per logo property.
pub fn render_logo_summary(path: &str, summary: &LogoSummary) -> Vec<String> {
    vec![
        format!("Generated generic logo: {}", path),
        format!("Format: {}", summary.format_name()),
        format!("Mode: {}", summary.mode_name()),
        format!("Size: {}x{}", summary.width, summary.height),
    ]
}

pub fn display_logo_summary(path: &str, summary: &LogoSummary) {
    let lines = render_logo_summary(path, summary);
    if let Some((first, rest)) = lines.split_first() {
        display_success(first);
        for line in rest {
            println!("  {}", line);
        }
    }
}

pub fn display_findings(findings: &[Finding]) {
    if findings.is_empty() {
        display_success("No personal data found in test files");
        return;
    }
    for finding in findings {
        display_failure(&finding.to_string());
    }
    eprintln!(
        "{}",
        style(format!("{} finding(s)", findings.len())).red().bold()
    );
}

/// Summary line of a check run.
pub fn render_check_summary(report: &CheckReport) -> String {
    let (passed, failed, skipped) = report.counts();
    format!(
        "{} passed, {} failed, {} skipped",
        passed, failed, skipped
    )
}

pub fn display_check_report(report: &CheckReport) {
    for rule in &report.reports {
        match &rule.outcome {
            RuleOutcome::Passed => println!("{} {}", style("✓").green(), rule.id),
            RuleOutcome::Skipped { reason } => println!(
                "{} {} {}",
                style("-").dim(),
                rule.id,
                style(format!("({})", reason)).dim()
            ),
            RuleOutcome::Failed { reasons } => {
                println!("{} {} {}", style("✗").red(), rule.id, style(&rule.description).dim());
                for reason in reasons {
                    println!("    {}", reason);
                }
            }
        }
    }

    let summary = render_check_summary(report);
    if report.passed() {
        println!("\n{}", style(summary).green().bold());
    } else {
        println!("\n{}", style(summary).red().bold());
    }
}
