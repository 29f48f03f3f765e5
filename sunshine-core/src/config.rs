use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::model::{DayBoundary, LocalePreference, Preferences, UnitPreference};

pub const DEFAULT_LOCATION: &str = "94043";

/// User preferences stored on disk.
///
/// Example TOML:
/// ```toml
/// location = "Kyiv"
/// units = "metric"
/// locale = "uk_ru"
/// utc_offset_seconds = 10800
/// use_today_layout = true
/// data_file = "/home/me/forecast.json"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Location setting the forecast is shown for (postal code or city name).
    pub location: String,
    pub units: UnitPreference,
    pub locale: LocalePreference,
    /// Offset from UTC, in seconds, at which calendar days begin.
    pub utc_offset_seconds: i32,
    /// Highlight the first row; off for two-pane layouts.
    pub use_today_layout: bool,
    /// JSON forecast file used when no `--file` is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
            units: UnitPreference::default(),
            locale: LocalePreference::default(),
            utc_offset_seconds: 0,
            use_today_layout: true,
            data_file: None,
        }
    }
}

impl Config {
    pub fn set_location(&mut self, location: &str) -> Result<()> {
        let trimmed = location.trim();
        if trimmed.is_empty() {
            return Err(anyhow!("Location must not be empty."));
        }
        self.location = trimmed.to_string();
        Ok(())
    }

    pub fn day_boundary(&self) -> Result<DayBoundary> {
        DayBoundary::from_offset_seconds(self.utc_offset_seconds).ok_or_else(|| {
            anyhow!(
                "Invalid utc_offset_seconds {}: must be strictly between -86400 and 86400.\n\
                 Hint: run `sunshine configure` to fix it.",
                self.utc_offset_seconds
            )
        })
    }

    pub fn preferences(&self) -> Result<Preferences> {
        Ok(Preferences {
            units: self.units,
            locale: self.locale,
            day_boundary: self.day_boundary()?,
        })
    }

    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "sunshine", "sunshine")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
