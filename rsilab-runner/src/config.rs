//! Pipeline configuration, loadable from TOML.
//!
//! ```toml
//! [rsi]
//! period = 14
//!
//! [thresholds]
//! oversold = 30.0
//! overbought = 70.0
//! ```
//!
//! Every field is optional; missing fields take the defaults shown above.

use std::path::{Path, PathBuf};

use rsilab_core::indicators::DEFAULT_RSI_PERIOD;
use rsilab_core::signals::Thresholds;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from reading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// RSI engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RsiConfig {
    pub period: usize,
}

impl Default for RsiConfig {
    fn default() -> Self {
        Self {
            period: DEFAULT_RSI_PERIOD,
        }
    }
}

/// Full configuration for one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SignalConfig {
    pub rsi: RsiConfig,
    pub thresholds: Thresholds,
}

impl SignalConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Replace the RSI period, re-validating.
    pub fn with_period(mut self, period: usize) -> Result<Self, ConfigError> {
        self.rsi.period = period;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rsi.period == 0 {
            return Err(ConfigError::Invalid("rsi.period must be >= 1".into()));
        }

        let Thresholds {
            oversold,
            overbought,
        } = self.thresholds;
        for (name, value) in [("oversold", oversold), ("overbought", overbought)] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "thresholds.{name} must be within [0, 100], got {value}"
                )));
            }
        }
        if oversold > overbought {
            return Err(ConfigError::Invalid(format!(
                "thresholds.oversold ({oversold}) must not exceed thresholds.overbought ({overbought})"
            )));
        }

        Ok(())
    }
}
