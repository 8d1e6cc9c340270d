//! Command module structure for the chartcheck CLI

use anyhow::Result;
use std::path::Path;

use chartcheck::catalog::Catalog;

pub mod catalog;
pub mod check;
pub mod scan;

/// Output format shared by the check/scan/catalog commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Resolve the active catalog: the given file, or the built-in table.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load_from(path),
        None => Ok(Catalog::builtin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_catalog_defaults_to_builtin() {
        let catalog = load_catalog(None).unwrap();
        assert!(catalog.contains("rstudio"));
    }

    #[test]
    fn test_load_catalog_missing_file_is_an_error() {
        assert!(load_catalog(Some(Path::new("/nonexistent/catalog.yaml"))).is_err());
    }
}
