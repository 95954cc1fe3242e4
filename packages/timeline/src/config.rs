use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_AUTHOR_LABEL_WIDTH: usize = 10;
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%H:%M";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid timestamp format '{0}'")]
    InvalidTimestampFormat(String),
}

/// Time zone used for timestamp labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeZoneChoice {
    #[default]
    Local,
    Utc,
}

/// Presentation settings for the timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Characters of the sender ID shown in a bubble header
    pub author_label_width: usize,

    /// `chrono` strftime pattern for bubble timestamps
    pub timestamp_format: String,

    pub timezone: TimeZoneChoice,

    /// Show the most recent event first
    pub newest_first: bool,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            author_label_width: DEFAULT_AUTHOR_LABEL_WIDTH,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            timezone: TimeZoneChoice::Local,
            newest_first: true,
        }
    }
}

impl TimelineConfig {
    /// `<config dir>/matryx/timeline.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("matryx").join("timeline.toml"))
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!("Loading timeline config from {}", path.display());
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&text)
    }

    /// Load an explicit file, else the default file if it exists, else defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid =
            StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error));
        if invalid {
            return Err(ConfigError::InvalidTimestampFormat(self.timestamp_format.clone()));
        }
        Ok(())
    }
}
