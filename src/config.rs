//! Configuration loading and management
//!
//! Handles parsing of `config.toml` files and the platform default
//! directories used when no override is given.

use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Directory the task store lives in; platform data dir when unset
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Directory exports land in; current directory when unset
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

/// Default config file location (`<platform config dir>/ticklist/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "ticklist").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Platform default for the data directory
pub fn default_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "ticklist").map(|dirs| dirs.data_dir().to_path_buf())
}

impl Config {
    /// Load configuration from a `config.toml` file
    pub fn load(path: &PathBuf) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file named on the command line, or fall back to the platform
    /// default location. A missing file at the default location is not an
    /// error; an explicitly named one that cannot be read is.
    pub fn load_or_default(explicit: Option<&PathBuf>) -> crate::error::Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::load(&path),
                _ => {
                    debug!("no config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Resolve the data directory: CLI/env override, then config file, then
    /// the platform default.
    pub fn resolve_data_dir(&self, cli: Option<&PathBuf>) -> crate::error::Result<PathBuf> {
        if let Some(dir) = cli {
            return Ok(dir.clone());
        }
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        default_data_dir().ok_or_else(|| {
            crate::error::Error::InvalidConfig(
                "no data directory available; pass --data-dir or set data_dir in config.toml"
                    .to_string(),
            )
        })
    }

    /// Resolve the export directory: CLI override, then config file, then the
    /// current directory.
    pub fn resolve_export_dir(&self, cli: Option<&PathBuf>) -> PathBuf {
        cli.cloned()
            .or_else(|| self.export_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn validate(&self) -> crate::error::Result<()> {
        if let Some(dir) = &self.data_dir {
            validate_dir(dir, "data_dir")?;
        }
        if let Some(dir) = &self.export_dir {
            validate_dir(dir, "export_dir")?;
        }
        Ok(())
    }
}

fn validate_dir(dir: &Path, field: &str) -> crate::error::Result<()> {
    if dir.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(crate::error::Error::InvalidConfig(format!(
            "{field} cannot be empty"
        )));
    }
    Ok(())
}
