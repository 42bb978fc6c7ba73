use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    book::Currency,
    core::utils::{app_base_dir, config_file_in, data_dir_in, ensure_dir, write_atomic},
    errors::BookError,
};

/// User preferences persisted between sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub default_currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_currency: Currency::Eur,
            data_dir: None,
        }
    }
}

impl Config {
    /// Directory the record files live in: the configured override, or the
    /// `data` directory under the application base dir.
    pub fn resolved_data_dir(&self, base: &Path) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| data_dir_in(base))
    }
}

/// Loads and saves the configuration file under the application base dir.
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, BookError> {
        Self::with_base_dir(app_base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, BookError> {
        ensure_dir(&base)?;
        let path = config_file_in(&base);
        Ok(Self { base, path })
    }

    pub fn load(&self) -> Result<Config, BookError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), BookError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.default_currency, Currency::Eur);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = Config {
            default_currency: Currency::Sgd,
            data_dir: Some(temp.path().join("elsewhere")),
        };
        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();
        assert_eq!(loaded.default_currency, Currency::Sgd);
        assert_eq!(loaded.data_dir, config.data_dir);
    }

    #[test]
    fn data_dir_defaults_under_the_base() {
        let temp = TempDir::new().unwrap();
        let config = Config::default();
        assert_eq!(
            config.resolved_data_dir(temp.path()),
            temp.path().join("data")
        );
    }
}
