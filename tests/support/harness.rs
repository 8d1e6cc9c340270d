use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// TestHarness provides an isolated chart tree in a temporary directory.
/// Charts are created with the values.schema.json layout chartcheck inspects.
pub struct TestHarness {
    pub dir: TempDir,
}

impl TestHarness {
    /// Creates a new empty harness (temp directory auto-cleaned on drop).
    pub fn new() -> Self {
        TestHarness {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a chart directory publishing the given version tags.
    pub fn add_chart(&self, name: &str, default: &str, list_enum: &[&str]) -> PathBuf {
        let schema = json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "type": "object",
            "properties": {
                "tjeneste": {
                    "type": "object",
                    "properties": {
                        "version": {
                            "type": "string",
                            "default": default,
                            "listEnum": list_enum
                        }
                    }
                }
            }
        });

        self.add_chart_with_schema(
            name,
            &serde_json::to_string_pretty(&schema).expect("Failed to serialize schema"),
        )
    }

    /// Create a chart directory with a raw schema document.
    pub fn add_chart_with_schema(&self, name: &str, schema: &str) -> PathBuf {
        let chart_dir = self.path().join(name);
        fs::create_dir_all(&chart_dir).expect("Failed to create chart dir");
        fs::write(chart_dir.join("values.schema.json"), schema).expect("Failed to write schema");
        chart_dir
    }

    /// Create a chart directory without any schema file.
    pub fn add_empty_chart(&self, name: &str) -> PathBuf {
        let chart_dir = self.path().join(name);
        fs::create_dir_all(&chart_dir).expect("Failed to create chart dir");
        chart_dir
    }

    /// Write a catalog file next to the charts.
    pub fn write_catalog(&self, yaml: &str) -> PathBuf {
        let path = self.path().join("catalog.yaml");
        fs::write(&path, yaml).expect("Failed to write catalog");
        path
    }
}

/// Path to the compiled chartcheck binary.
pub fn chartcheck_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_chartcheck"))
}
