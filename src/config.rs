//! Configuration management for the catalog

use std::path::PathBuf;

use config::{Config, File};
use serde::Deserialize;

use crate::error::AppResult;

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// File holding the serialized catalog
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from built-in defaults and the optional `config/default` file
    pub fn load() -> AppResult<Self> {
        Self::load_from("config/default")
    }

    /// Load configuration, layering the named file over defaults.
    ///
    /// Any format the `config` crate recognises by extension is accepted.
    pub fn load_from(name: &str) -> AppResult<Self> {
        let storage = StorageConfig::default();
        let logging = LoggingConfig::default();

        let config = Config::builder()
            .set_default("storage.path", storage.path.to_string_lossy().into_owned())?
            .set_default("logging.level", logging.level)?
            .set_default("logging.format", logging.format)?
            .add_source(File::with_name(name).required(false))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("biblioteca_livros.json"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
