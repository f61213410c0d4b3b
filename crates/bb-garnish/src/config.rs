use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::DEFAULT_DATABASE_PATH;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: PathBuf,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE_PATH),
            debug: false,
        }
    }
}

impl Config {
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_contents = tokio::fs::read_to_string(path).await?;
        Ok(toml::from_str(file_contents.as_str())?)
    }
}
