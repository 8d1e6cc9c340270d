//! Loading and field extraction for `values.schema.json`.

use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::paths::{SCHEMA_FILE, VERSION_DEFAULT_FIELD, VERSION_FIELD, VERSION_OPTIONS_FIELD};

/// Raw version field values as read from a chart schema, before build-date
/// suffixes are stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionField {
    pub default: String,
    pub options: Vec<String>,
}

/// Read and parse `values.schema.json` from a chart directory.
pub fn load_schema_value(chart_dir: &Path) -> Result<Value> {
    let path = chart_dir.join(SCHEMA_FILE);

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read schema file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse schema as JSON: {}", path.display()))
}

/// Compile the document as a JSON Schema to confirm it is well-formed.
pub fn compile_check(schema: &Value) -> Result<()> {
    jsonschema::validator_for(schema)
        .map(|_| ())
        .map_err(|e| anyhow!("Document does not compile as a JSON Schema: {}", e))
}

/// Extract the version field from a chart schema.
///
/// `default` is required. `listEnum` is optional and defaults to the empty
/// list; when present it must be an array of strings.
pub fn extract_version_field(schema: &Value) -> Result<VersionField> {
    let version = schema
        .pointer("/properties/tjeneste/properties/version")
        .ok_or_else(|| anyhow!("Schema has no {} field", VERSION_FIELD))?;

    let default = version
        .get("default")
        .and_then(Value::as_str)
        .ok_or_else(|| anyhow!("Schema field {} is missing or not a string", VERSION_DEFAULT_FIELD))?
        .to_string();

    let options = match version.get("listEnum") {
        None => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    anyhow!("Schema field {} contains a non-string entry", VERSION_OPTIONS_FIELD)
                })
            })
            .collect::<Result<Vec<_>>>()?,
        Some(_) => anyhow::bail!("Schema field {} is not an array", VERSION_OPTIONS_FIELD),
    };

    Ok(VersionField { default, options })
}
