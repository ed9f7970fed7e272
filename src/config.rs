use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::EmissionFactors;
use crate::store::DEFAULT_LOG_FILE;

const APP_NAME: &str = "footprint-tracker";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// History log location
    pub log_path: PathBuf,
    /// Directory for CSV exports
    pub export_dir: PathBuf,
    /// Replaces the built-in factor table when present
    pub factors: Option<EmissionFactors>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
            export_dir: PathBuf::from("."),
            factors: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`, or from the user's config directory.
    /// Returns default config if the file doesn't exist or fails to parse.
    pub fn load(path: Option<&Path>) -> Self {
        match Self::try_load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn try_load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => get_config_path()?,
        };
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).context("Failed to read config file")?;

        let config = serde_json::from_str(&content).context("Failed to parse config file")?;

        tracing::debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Directory to export into: `requested` when given, else the configured one.
    pub fn export_dir_or(&self, requested: Option<PathBuf>) -> PathBuf {
        requested.unwrap_or_else(|| self.export_dir.clone())
    }

    /// The effective factor table.
    pub fn emission_factors(&self) -> EmissionFactors {
        self.factors.clone().unwrap_or_default()
    }
}

fn get_config_path() -> Result<PathBuf> {
    let mut path =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}
