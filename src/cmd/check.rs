//! Check command: validate chart directories against the pinned catalog

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

use chartcheck::catalog::Catalog;
use chartcheck::check::{check_chart, CheckOutcome};
use chartcheck::ui;

use super::OutputFormat;

/// Validate the given chart directories and report the results.
pub fn cmd_check(
    chart_dirs: &[PathBuf],
    catalog_path: Option<&Path>,
    format: OutputFormat,
    strict: bool,
) -> Result<()> {
    let catalog = super::load_catalog(catalog_path)?;
    run_checks(chart_dirs, &catalog, format, strict)
}

/// Check every chart directory, print the report and exit 1 on error
/// findings. Shared by the check and scan commands.
pub fn run_checks(
    chart_dirs: &[PathBuf],
    catalog: &Catalog,
    format: OutputFormat,
    strict: bool,
) -> Result<()> {
    let mut outcomes = Vec::new();
    for chart_dir in chart_dirs {
        outcomes.push(check_chart(chart_dir, catalog, strict)?);
    }

    match format {
        OutputFormat::Json => print_json(&outcomes)?,
        OutputFormat::Text => print_text(&outcomes),
    }

    if outcomes.iter().any(CheckOutcome::has_errors) {
        std::process::exit(1);
    }

    Ok(())
}

fn print_json(outcomes: &[CheckOutcome]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(outcomes)?);
    Ok(())
}

fn print_text(outcomes: &[CheckOutcome]) {
    let quiet = ui::is_quiet();

    for outcome in outcomes {
        // Quiet mode still prints every chart with findings
        if !quiet || !outcome.findings.is_empty() {
            if outcome.skipped {
                println!(
                    "{} {} {}",
                    ui::outcome_icon(outcome),
                    outcome.chart.cyan(),
                    "(not in catalog)".dimmed()
                );
            } else {
                println!("{} {}", ui::outcome_icon(outcome), outcome.chart.cyan());
            }
        }

        for finding in &outcome.findings {
            finding.display();
        }
    }

    let checked = outcomes.iter().filter(|o| !o.skipped).count();
    let skipped = outcomes.len() - checked;
    let failed = outcomes.iter().filter(|o| o.has_errors()).count();
    let warned = outcomes
        .iter()
        .filter(|o| !o.has_errors() && o.has_warnings())
        .count();

    println!();
    if failed == 0 {
        print!("{} {} chart(s) checked", "✓".green(), checked);
        if warned > 0 {
            print!(", {} {}", warned, "warned".yellow());
        }
        if skipped > 0 {
            print!(", {} skipped", skipped);
        }
        println!();
    } else {
        println!(
            "{} {} of {} chart(s) failed validation",
            "✗".red(),
            failed,
            checked
        );
    }
}
