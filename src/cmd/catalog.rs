//! Catalog command: print the active expectations table

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use super::OutputFormat;

/// Print the catalog that checks would run against.
pub fn cmd_catalog(catalog_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let catalog = super::load_catalog(catalog_path)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
        OutputFormat::Text => {
            println!("{}", "Pinned image tags".bold());
            println!();
            for (chart, expectation) in catalog.iter() {
                println!(
                    "  {} default {}, options [{}]",
                    chart.cyan(),
                    expectation.default,
                    expectation.options.join(", ")
                );
            }
            println!();
            println!("{} {} chart(s) pinned", "ℹ".blue(), catalog.len());
        }
    }

    Ok(())
}
