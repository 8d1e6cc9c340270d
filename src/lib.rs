//! # Chartcheck - Helm chart image-tag validation
//!
//! Chartcheck validates a Helm chart's `values.schema.json` against a pinned
//! catalog of expected default/allowed container image version tags.
//!
//! ## Overview
//!
//! Charts publish the image versions a user may pick through the
//! `.properties.tjeneste.properties.version` field of their values schema:
//! a `default` tag plus an optional `listEnum` of allowed tags. Image tags
//! carry a trailing `-<date>` build segment (`r4.4.0-2024.11.18`) that changes
//! on every rebuild, so comparisons are made on the base tag with that
//! segment stripped.
//!
//! ## Core Concepts
//!
//! - **Catalog**: the pinned expectations table, either built in or loaded
//!   from a YAML file
//! - **Base tag**: an image tag with its trailing `-<date>` segment removed
//! - **Findings**: diagnostics produced by comparing a chart schema against
//!   the catalog
//!
//! ## Modules
//!
//! - [`catalog`] - pinned expectations and catalog file loading
//! - [`tag`] - image tag splitting and the build-date heuristic
//! - [`schema`] - `values.schema.json` loading and version field extraction
//! - [`check`] - catalog comparison producing findings
//! - [`discover`] - chart discovery under a chart root
//! - [`ui`] - colored output helpers
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use chartcheck::catalog::Catalog;
//! use chartcheck::check::check_chart;
//!
//! let catalog = Catalog::builtin();
//! let outcome = check_chart(Path::new("charts/rstudio"), &catalog, false)
//!     .expect("Failed to check chart");
//!
//! if outcome.has_errors() {
//!     eprintln!("chart does not match the pinned tags");
//! }
//! ```

// Re-export all public modules
pub mod catalog;
pub mod check;
pub mod discover;
pub mod schema;
pub mod tag;
pub mod ui;

/// File name and schema field-path constants.
pub mod paths {
    /// Schema file inside a chart directory: `values.schema.json`
    pub const SCHEMA_FILE: &str = "values.schema.json";
    /// JSON path of the version field in a chart schema
    pub const VERSION_FIELD: &str = ".properties.tjeneste.properties.version";
    /// JSON path of the default image tag
    pub const VERSION_DEFAULT_FIELD: &str = ".properties.tjeneste.properties.version.default";
    /// JSON path of the enumerated image tags
    pub const VERSION_OPTIONS_FIELD: &str = ".properties.tjeneste.properties.version.listEnum";
}
