use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use super::mapper::toml_to_config;
use crate::models::config::CountdownConfig;

const SETTINGS_FILE: &str = "config.toml";

/// Loads the countdown configuration from a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses `config.toml` in the platform config directory.
    pub fn from_default_location() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "countdown-card", "countdown-card")
            .ok_or_else(|| anyhow!("Failed to determine config directory"))?;
        Ok(dirs.config_dir().join(SETTINGS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the configuration. A missing file yields the defaults.
    pub fn load(&self) -> Result<CountdownConfig> {
        if !self.path.exists() {
            log::info!(
                "No settings file at {}, using defaults",
                self.path.display()
            );
            let config = CountdownConfig::default();
            config.validate()?;
            return Ok(config);
        }

        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let config = toml_to_config(&text, &self.path.display().to_string())?;
        log::info!(
            "Loaded settings from {}: {} holidays, workday ends {}:00",
            self.path.display(),
            config.holidays.len(),
            config.workday.end_hour
        );
        Ok(config)
    }
}
