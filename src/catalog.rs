//! Pinned image-tag expectations for known charts.
//!
//! The built-in table pins the base tags each known chart must publish in its
//! values schema. A YAML catalog file can replace the table entirely, e.g.
//!
//! ```yaml
//! rstudio:
//!   default: r4.4.0
//!   options:
//!     - r4.3.3
//!     - r4.4.0
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Expected image tags for one chart, with build-date suffixes stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartExpectation {
    /// Expected default tag
    pub default: String,
    /// Expected enumerated tags, in schema order
    #[serde(default)]
    pub options: Vec<String>,
}

/// Map from chart name to its pinned expectations.
///
/// Backed by a `BTreeMap` so listings iterate in name order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    charts: BTreeMap<String, ChartExpectation>,
}

fn expectation(default: &str, options: &[&str]) -> ChartExpectation {
    ChartExpectation {
        default: default.to_string(),
        options: options.iter().map(|s| s.to_string()).collect(),
    }
}

impl Catalog {
    /// The built-in expectations table.
    pub fn builtin() -> Self {
        let mut charts = BTreeMap::new();
        charts.insert(
            "jdemetra".to_string(),
            expectation("jd2.2.5", &["jd2.2.5", "jd3.2.4"]),
        );
        charts.insert(
            "jupyter".to_string(),
            expectation("r4.4.0-py313", &["r4.4.0-py313"]),
        );
        charts.insert(
            "jupyter-playground".to_string(),
            expectation("r4.4.0-py313", &["r4.4.0-py313"]),
        );
        charts.insert(
            "jupyter-pyspark".to_string(),
            expectation("py313-spark3.5.3", &["py313-spark3.5.3"]),
        );
        charts.insert(
            "rstudio".to_string(),
            expectation("r4.4.0", &["r4.3.3", "r4.4.0"]),
        );
        charts.insert(
            "vscode-python".to_string(),
            expectation("r4.4.0-py313", &["r4.4.0-py313"]),
        );
        Catalog { charts }
    }

    /// Load a catalog from a YAML file. The file replaces the built-in table
    /// entirely.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog from {}", path.display()))?;

        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse catalog file {}", path.display()))
    }

    /// Look up the expectations for a chart. `None` means the chart is not
    /// known and should be skipped.
    pub fn get(&self, chart: &str) -> Option<&ChartExpectation> {
        self.charts.get(chart)
    }

    pub fn contains(&self, chart: &str) -> bool {
        self.charts.contains_key(chart)
    }

    /// Chart names and expectations in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ChartExpectation)> {
        self.charts.iter().map(|(name, exp)| (name.as_str(), exp))
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}
