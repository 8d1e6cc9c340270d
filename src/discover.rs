//! Chart discovery under a chart root.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::paths::SCHEMA_FILE;

/// Find chart directories under `root`: every direct child directory holding
/// a `values.schema.json`. Returns the chart directories in sorted order.
///
/// A root with no matches is an error, not an empty result.
pub fn discover_charts(root: &Path) -> Result<Vec<PathBuf>> {
    let pattern = root.join("*").join(SCHEMA_FILE);
    let pattern = pattern.to_string_lossy().into_owned();

    let mut charts = Vec::new();
    for entry in
        glob::glob(&pattern).with_context(|| format!("Invalid chart root pattern: {}", pattern))?
    {
        let schema_path = entry.context("Failed to read chart root entry")?;
        if let Some(dir) = schema_path.parent() {
            charts.push(dir.to_path_buf());
        }
    }
    charts.sort();

    if charts.is_empty() {
        anyhow::bail!(
            "No charts with a {} found under {}",
            SCHEMA_FILE,
            root.display()
        );
    }

    Ok(charts)
}
