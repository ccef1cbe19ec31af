//! Application settings loaded from an optional TOML file.
//!
//! Every section and key is optional; anything missing falls back to
//! [`AppConfig::default`].
//!
//! ```toml
//! [window]
//! width = 1100.0
//! height = 900.0
//!
//! [logging]
//! level = "info,salary_ui=debug"
//! stdout = true
//! file = "calculator.log"
//!
//! [display]
//! currency_symbol = "$"
//! grouping_separator = ","
//!
//! [share]
//! page_url = "https://somewhere.com/salary-calculator"
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use salary_core::{
    NumberLocale,
    share::{ShareError, ShareLinks},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("window size must be positive, got {width}x{height}")]
    InvalidWindowSize { width: f32, height: f32 },

    #[error("invalid log level '{level}': {reason}")]
    InvalidLogLevel { level: String, reason: String },

    #[error(transparent)]
    InvalidShareUrl(#[from] ShareError),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub logging: LoggingConfig,
    pub display: DisplayConfig,
    pub share: ShareConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 900.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Bare level or full `EnvFilter` directive. `RUST_LOG` takes precedence.
    pub level: String,
    pub stdout: bool,
    /// Appends log records to this file when set. The directory must exist.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            stdout: true,
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency_symbol: String,
    pub grouping_separator: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let locale = NumberLocale::EN_US;
        Self {
            currency_symbol: locale.currency_symbol.into_owned(),
            grouping_separator: locale.grouping_separator,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Public address of the calculator, used in share text and links.
    pub page_url: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            page_url: "https://somewhere.com/salary-calculator".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads and validates a config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file '{}'", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("invalid config file '{}'", path.display()))?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let WindowConfig { width, height } = self.window;
        if width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::InvalidWindowSize { width, height });
        }
        EnvFilter::try_new(&self.logging.level).map_err(|e| ConfigError::InvalidLogLevel {
            level: self.logging.level.clone(),
            reason: e.to_string(),
        })?;
        self.share_links()?;
        Ok(())
    }

    pub fn locale(&self) -> NumberLocale {
        NumberLocale::new(
            self.display.currency_symbol.clone(),
            self.display.grouping_separator,
        )
    }

    pub fn share_links(&self) -> Result<ShareLinks, ShareError> {
        ShareLinks::new(&self.share.page_url)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.locale(), NumberLocale::EN_US);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [window]
            width = 640.0

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.window.width, 640.0);
        assert_eq!(config.window.height, 900.0);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.stdout);
        assert_eq!(config.share, ShareConfig::default());
    }

    #[test]
    fn display_section_builds_locale() {
        let config = AppConfig::from_toml_str(
            r#"
            [display]
            currency_symbol = "US$"
            grouping_separator = " "
            "#,
        )
        .unwrap();

        assert_eq!(config.locale(), NumberLocale::new("US$", ' '));
    }

    #[test]
    fn rejects_non_positive_window_size() {
        let config = AppConfig {
            window: WindowConfig {
                width: 0.0,
                height: 600.0,
            },
            ..Default::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWindowSize { .. })
        ));
    }

    #[test]
    fn rejects_bad_log_directive() {
        let mut config = AppConfig::default();
        config.logging.level = "salary_ui=loud".to_string();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLogLevel { .. })
        ));
    }

    #[test]
    fn rejects_non_web_share_url() {
        let err = AppConfig::from_toml_str(
            r#"
            [share]
            page_url = "file:///tmp/calculator.html"
            "#,
        )
        .unwrap_err();

        assert!(
            err.to_string().contains("unsupported URL scheme"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn rejects_unknown_value_types() {
        assert!(AppConfig::from_toml_str("[window]\nwidth = \"wide\"").is_err());
    }
}
