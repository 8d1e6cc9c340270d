//! Centralized UI formatting and color utilities
//!
//! This module provides a unified interface for status colors and icons used
//! throughout the chartcheck CLI.

use colored::{ColoredString, Colorize};

use crate::check::{CheckOutcome, Severity};

/// Check if quiet mode is enabled via environment variable
pub fn is_quiet() -> bool {
    std::env::var("CHARTCHECK_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Returns a colored status icon for a per-chart outcome line.
///
/// Icons:
/// - skipped: • (dimmed)
/// - errors: ✗ (red)
/// - warnings only: ⚠ (yellow)
/// - clean: ✓ (green)
pub fn outcome_icon(outcome: &CheckOutcome) -> ColoredString {
    if outcome.skipped {
        "•".dimmed()
    } else if outcome.has_errors() {
        "✗".red()
    } else if outcome.has_warnings() {
        "⚠".yellow()
    } else {
        "✓".green()
    }
}

/// Returns a colored icon for a finding severity.
pub fn severity_icon(severity: Severity) -> ColoredString {
    match severity {
        Severity::Warning => "⚠".yellow(),
        Severity::Error => "✗".red(),
    }
}
