//! Catalog comparison for chart schemas.
//!
//! `check_chart` is the whole pipeline for one chart: derive the chart name
//! from the directory, load its `values.schema.json`, strip build-date
//! suffixes from the published tags and compare them against the catalog.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

use crate::catalog::Catalog;
use crate::paths::{VERSION_DEFAULT_FIELD, VERSION_FIELD, VERSION_OPTIONS_FIELD};
use crate::schema;
use crate::tag;
use crate::ui;

/// Severity level for findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Warning - should be addressed but does not fail the run
    Warning,
    /// Error - fails the run
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A single diagnostic about a chart schema
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// Severity of the finding
    pub severity: Severity,
    /// Chart the finding belongs to
    pub chart: String,
    /// JSON path of the offending schema field
    pub field: String,
    /// Message describing the finding
    pub message: String,
    /// Expected value, for mismatches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// Actual value, for mismatches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub got: Option<String>,
}

impl Finding {
    fn new(
        severity: Severity,
        chart: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            chart: chart.into(),
            field: field.into(),
            message: message.into(),
            expected: None,
            got: None,
        }
    }

    /// Create an error finding
    pub fn error(
        chart: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Error, chart, field, message)
    }

    /// Create a warning finding
    pub fn warning(
        chart: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Warning, chart, field, message)
    }

    /// Attach expected/got values to this finding
    pub fn with_values(mut self, expected: impl Into<String>, got: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self.got = Some(got.into());
        self
    }

    /// Display the finding with colored output
    pub fn display(&self) {
        println!(
            "  {} {} [{}]: {}",
            ui::severity_icon(self.severity),
            self.chart.cyan(),
            self.severity,
            self.message
        );
        println!("      {} field '{}'", "→".cyan(), self.field);

        if let (Some(expected), Some(got)) = (&self.expected, &self.got) {
            println!("      {} {}", "Expected".dimmed(), expected.green());
            println!("      {} {}", "Got     ".dimmed(), got.red());
        }
    }
}

/// Result of checking one chart directory
#[derive(Debug, Serialize)]
pub struct CheckOutcome {
    /// Chart name, derived from the directory path
    pub chart: String,
    /// True when the chart is not in the catalog and was not validated
    pub skipped: bool,
    /// All findings for this chart
    pub findings: Vec<Finding>,
}

impl CheckOutcome {
    /// Check if there are any error findings
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Error)
    }

    /// Check if there are any warning findings
    pub fn has_warnings(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Warning)
    }
}

/// Chart name from a chart directory path: the final path component.
pub fn chart_name(chart_dir: &Path) -> Result<String> {
    chart_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow::anyhow!("Cannot derive a chart name from {}", chart_dir.display()))
}

/// Check one chart directory against the catalog.
///
/// Charts not in the catalog are skipped successfully. I/O problems and
/// schema-shape problems are hard errors; tag mismatches become findings on
/// the returned outcome.
pub fn check_chart(chart_dir: &Path, catalog: &Catalog, strict: bool) -> Result<CheckOutcome> {
    let chart = chart_name(chart_dir)?;

    let Some(expected) = catalog.get(&chart) else {
        return Ok(CheckOutcome {
            chart,
            skipped: true,
            findings: Vec::new(),
        });
    };

    let schema_value = schema::load_schema_value(chart_dir)?;
    let mut findings = Vec::new();

    if let Err(e) = schema::compile_check(&schema_value) {
        findings.push(Finding::error(&chart, ".", e.to_string()));
    }

    let version = schema::extract_version_field(&schema_value)?;

    let default_got = tag::base_tag(&version.default);
    if expected.default != default_got {
        findings.push(
            Finding::error(
                &chart,
                VERSION_DEFAULT_FIELD,
                format!(
                    "Unexpected default image tag in the values.schema.json for the helm chart {}",
                    chart
                ),
            )
            .with_values(&expected.default, default_got),
        );
    }

    let options_got: Vec<String> = version
        .options
        .iter()
        .map(|t| tag::base_tag(t).to_string())
        .collect();
    if expected.options != options_got {
        findings.push(
            Finding::error(
                &chart,
                VERSION_OPTIONS_FIELD,
                format!(
                    "Unexpected image tag list in the values.schema.json for the helm chart {}",
                    chart
                ),
            )
            .with_values(
                format!("[{}]", expected.options.join(", ")),
                format!("[{}]", options_got.join(", ")),
            ),
        );
    }

    // A chart publishing an enum should include its own default in it.
    if !options_got.is_empty() && !options_got.iter().any(|o| o == default_got) {
        findings.push(Finding::warning(
            &chart,
            VERSION_DEFAULT_FIELD,
            format!(
                "Default image tag {} is not one of the schema's own listEnum entries",
                default_got
            ),
        ));
    }

    if strict {
        for raw in std::iter::once(&version.default).chain(version.options.iter()) {
            let dated = tag::date_segment(raw).is_some_and(tag::looks_like_date);
            if !dated {
                findings.push(Finding::warning(
                    &chart,
                    VERSION_FIELD,
                    format!("Image tag {} has no YYYY.MM.DD build-date suffix", raw),
                ));
            }
        }
    }

    Ok(CheckOutcome {
        chart,
        skipped: false,
        findings,
    })
}
