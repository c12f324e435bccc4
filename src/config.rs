//! Configuration loading and management
//!
//! Handles parsing of `config.toml` in the data directory. The file is
//! optional; every field has a default and CLI flags override config values.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::Storage;
use crate::view::{FilterMode, SortMode};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// List view configuration
    #[serde(default)]
    pub list: ListConfig,
}

/// Defaults for the list view's selectable inputs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListConfig {
    /// Completion filter used when `--filter` is not given
    #[serde(default)]
    pub default_filter: FilterMode,

    /// Sort key used when `--sort` is not given
    #[serde(default)]
    pub default_sort: SortMode,
}

impl Config {
    /// Parse configuration from an explicit path
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from the data directory, using defaults when the
    /// file is missing or unreadable.
    pub fn load_from_dir(storage: &Storage) -> Self {
        let path = storage.config_file();
        if !path.exists() {
            return Self::default();
        }

        match Self::load(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(
                    "invalid config at {}; using defaults: {err}",
                    path.display()
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_missing() {
        let temp = TempDir::new().expect("tempdir");
        let storage = Storage::new(temp.path().to_path_buf());

        let config = Config::load_from_dir(&storage);
        assert_eq!(config.list.default_filter, FilterMode::All);
        assert_eq!(config.list.default_sort, SortMode::Date);
    }

    #[test]
    fn overrides_from_toml() {
        let temp = TempDir::new().expect("tempdir");
        let storage = Storage::new(temp.path().to_path_buf());
        fs::write(
            storage.config_file(),
            "[list]\ndefault_filter = \"pending\"\ndefault_sort = \"title\"\n",
        )
        .expect("write config");

        let config = Config::load_from_dir(&storage);
        assert_eq!(config.list.default_filter, FilterMode::Pending);
        assert_eq!(config.list.default_sort, SortMode::Title);
    }

    #[test]
    fn load_rejects_invalid_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "this = [not valid").expect("write config");

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let temp = TempDir::new().expect("tempdir");
        let storage = Storage::new(temp.path().to_path_buf());
        fs::write(storage.config_file(), "this = [not valid").expect("write config");

        let config = Config::load_from_dir(&storage);
        assert_eq!(config.list.default_filter, FilterMode::All);
    }
}
