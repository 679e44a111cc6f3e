//! Application configuration for the marketplace frontend.
//!
//! Configuration is loaded from `<config_dir>/mtsa/mtsa.toml` and provides
//! window, API, modal, session and logging settings. Every section is
//! optional and falls back to its defaults.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use crate::modal::DEFAULT_CLOSE_DELAY_MS;

/// Frontend configuration loaded from `mtsa.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    pub window: WindowConfig,
    pub api: ApiConfig,
    pub modal: ModalConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Remote marketplace API.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Dialog behaviour.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    /// Delay between hiding a dialog and notifying its owner.
    pub close_delay_ms: u64,
}

/// Signed-in user, if any.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub user_id: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_file: Option<PathBuf>,
    pub level: String,
    pub suppressed_patterns: Vec<String>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "MTSA Marketplace".to_string(),
            width: 1280.0,
            height: 860.0,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_secs: 15,
        }
    }
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            close_delay_ms: DEFAULT_CLOSE_DELAY_MS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: Some(std::env::temp_dir().join("mtsa-market.log")),
            level: "info".to_string(),
            suppressed_patterns: vec![
                "SelectionDidChange".to_string(),
                "Dispatched unknown event".to_string(),
                "mousemove".to_string(),
                "pointermove".to_string(),
            ],
        }
    }
}

impl MarketConfig {
    /// Path of the default configuration file, if a config dir exists.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mtsa").join("mtsa.toml"))
    }

    /// Load configuration from the default location.
    ///
    /// Falls back to defaults if the file doesn't exist.
    /// Returns an error only if the file exists but is malformed.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str::<MarketConfig>(&content)?;
        Ok(config)
    }

    #[must_use]
    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    #[must_use]
    pub fn with_api_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_close_delay_ms(mut self, delay_ms: u64) -> Self {
        self.modal.close_delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.session.user_id = Some(user_id.into());
        self
    }

    /// Set the log level (e.g., "info", "debug", "warn").
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    /// API base URL without a trailing slash.
    #[must_use]
    pub fn api_base(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }
}
