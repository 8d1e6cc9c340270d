//! Scan command: discover charts under a root and validate each

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use chartcheck::discover::discover_charts;
use chartcheck::ui;

use super::OutputFormat;

/// Discover every chart under `root` and validate it against the catalog.
pub fn cmd_scan(
    root: &Path,
    catalog_path: Option<&Path>,
    format: OutputFormat,
    strict: bool,
) -> Result<()> {
    let catalog = super::load_catalog(catalog_path)?;
    let chart_dirs = discover_charts(root)?;

    if format == OutputFormat::Text && !ui::is_quiet() {
        println!(
            "{} {} chart(s) under {}",
            "Scanning".bold(),
            chart_dirs.len(),
            root.display()
        );
        println!();
    }

    super::check::run_checks(&chart_dirs, &catalog, format, strict)
}
