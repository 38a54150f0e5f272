//! Configuration loading
//!
//! Global config lives at `~/.config/stt/config.toml`. An explicit `--config`
//! path or the `STT_CONFIG` env var overrides it; a missing file just means
//! defaults. `STT_DB` overrides the database path from any source.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database file path; defaults to the platform data directory.
    pub path: Option<PathBuf>,
}

impl Config {
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("STT_CONFIG").ok().map(PathBuf::from));

        let path = match explicit {
            Some(path) => path,
            None => match dirs::config_dir() {
                Some(dir) => dir.join("stt/config.toml"),
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)?;
        toml::from_str(&raw)
            .map_err(|err| TrackerError::Config(format!("{}: {err}", path.display())))
    }

    /// Resolve the database path: `STT_DB` env, then config file, then the
    /// platform data directory.
    pub fn database_path(&self) -> Result<PathBuf> {
        if let Ok(path) = std::env::var("STT_DB") {
            return Ok(PathBuf::from(path));
        }
        if let Some(path) = &self.database.path {
            return Ok(path.clone());
        }
        let dir = dirs::data_dir()
            .ok_or_else(|| TrackerError::Config("data directory not found".to_string()))?;
        Ok(dir.join("stt/stt.db"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_database_section() {
        let config: Config = toml::from_str("[database]\npath = \"/tmp/test.db\"\n").unwrap();
        assert_eq!(config.database.path, Some(PathBuf::from("/tmp/test.db")));
    }

    #[test]
    fn empty_config_is_valid() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.database.path.is_none());
    }
}
