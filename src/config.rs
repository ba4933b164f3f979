//! Wizard configuration.
//!
//! Every field has a default, so a config file only needs to name what it
//! changes:
//!
//! ```rust
//! use symptom_wizard::config::WizardConfig;
//!
//! let config = WizardConfig::from_json(r#"{ "age_range": { "min": 18, "max": 99 } }"#).unwrap();
//! assert_eq!(config.age_range.min, 18);
//! assert_eq!(config.currency, "MYR");
//! ```

use crate::persistence::SessionMetadata;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Age range is empty: min {min} > max {max}")]
    EmptyAgeRange { min: u32, max: u32 },
}

/// Inclusive range of accepted ages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

impl AgeRange {
    pub fn contains(&self, age: u32) -> bool {
        (self.min..=self.max).contains(&age)
    }
}

impl Default for AgeRange {
    fn default() -> Self {
        Self { min: 1, max: 120 }
    }
}

/// Client description sent when a session is opened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientInfo {
    pub user_agent: String,
    pub platform: String,
}

impl Default for ClientInfo {
    fn default() -> Self {
        Self {
            user_agent: concat!("symptom-wizard/", env!("CARGO_PKG_VERSION")).to_string(),
            platform: std::env::consts::OS.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    pub age_range: AgeRange,
    pub client: ClientInfo,
    /// ISO 4217 code used when displaying totals
    pub currency: String,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            age_range: AgeRange::default(),
            client: ClientInfo::default(),
            currency: "MYR".to_string(),
        }
    }
}

impl WizardConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: WizardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.age_range.min > self.age_range.max {
            return Err(ConfigError::EmptyAgeRange {
                min: self.age_range.min,
                max: self.age_range.max,
            });
        }
        Ok(())
    }

    /// Metadata for a session opened now.
    pub fn session_metadata(&self) -> SessionMetadata {
        SessionMetadata {
            started_at: Utc::now(),
            user_agent: self.client.user_agent.clone(),
            platform: self.client.platform.clone(),
        }
    }

    /// Format an amount in minor units, e.g. `MYR 12.50`.
    pub fn format_amount(&self, cents: u64) -> String {
        format!("{} {}.{:02}", self.currency, cents / 100, cents % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config = WizardConfig::from_json("{}").unwrap();
        assert_eq!(config, WizardConfig::default());
    }

    #[test]
    fn inverted_age_range_is_rejected() {
        let err = WizardConfig::from_json(r#"{ "age_range": { "min": 50, "max": 10 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyAgeRange { min: 50, max: 10 }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            WizardConfig::from_json("{ age_range"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            WizardConfig::load("/nonexistent/wizard.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn amounts_are_formatted_in_major_units() {
        let config = WizardConfig::default();
        assert_eq!(config.format_amount(1250), "MYR 12.50");
        assert_eq!(config.format_amount(5), "MYR 0.05");
    }

    #[test]
    fn session_metadata_uses_client_info() {
        let mut config = WizardConfig::default();
        config.client.platform = "web".to_string();
        assert_eq!(config.session_metadata().platform, "web");
    }
}
