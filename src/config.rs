//! Runtime configuration.
//!
//! Everything has a default, so running without a config file is the
//! normal case. Command-line flags override whatever the file sets.

use crate::catalog::Catalog;
use crate::error::{Result, WizardError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WizardConfig {
    /// TOML catalog replacing the built-in job tables.
    pub catalog: Option<PathBuf>,
    /// tracing filter directive, e.g. `info` or `talent_wizard=debug`.
    pub log_filter: String,
    /// Emit views as JSON lines instead of text.
    pub json: bool,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            log_filter: "warn".to_string(),
            json: false,
        }
    }
}

impl WizardConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| WizardError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| WizardError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The configured catalog, or the built-in one when none is set.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_use_builtin_catalog() {
        let config = WizardConfig::default();

        assert_eq!(config.log_filter, "warn");
        assert!(!config.json);
        assert_eq!(config.load_catalog().unwrap(), Catalog::builtin());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "json = true").unwrap();

        let config = WizardConfig::load(file.path()).unwrap();
        assert!(config.json);
        assert_eq!(config.log_filter, "warn");
        assert!(config.catalog.is_none());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "evaluation_percentage = 90").unwrap();

        let err = WizardConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, WizardError::ConfigParse { .. }));
    }

    #[test]
    fn missing_catalog_file_surfaces_error() {
        let config = WizardConfig {
            catalog: Some(PathBuf::from("/no/such/catalog.toml")),
            ..WizardConfig::default()
        };

        assert!(matches!(
            config.load_catalog(),
            Err(WizardError::CatalogRead { .. })
        ));
    }
}
