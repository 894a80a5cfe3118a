//! User configuration (`config.toml`)
//!
//! Every key is optional; missing keys take the defaults below and command
//! line flags override whatever the file says.

use anyhow::{Context, Result};
use chrono::Weekday;
use numkit::{Locale, NumberFormatter};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::paths;

/// Problems found in an otherwise well-formed config file
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown week day '{0}' (expected a name like 'sunday' or 'mon')")]
    UnknownWeekday(String),

    #[error("invalid currency code '{0}' (expected three letters like 'USD')")]
    InvalidCurrency(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpersConfig {
    /// Locale tag for number formatting
    pub locale: String,
    /// Default ISO-4217 currency code
    pub currency: String,
    /// Default country for postal codes
    pub country: String,
    /// First day of the week for week boundaries
    pub week_start: String,
    pub date_format: String,
    pub time_format: String,
    pub datetime_format: String,
}

impl Default for HelpersConfig {
    fn default() -> Self {
        Self {
            locale: numkit::locale::EN_US.tag.to_string(),
            currency: constkit::Currency::Usd.code().to_string(),
            country: constkit::Country::US.code().to_string(),
            week_start: datekit::WEEK_START.to_string(),
            date_format: datekit::DEFAULT_DATE_PATTERN.to_string(),
            time_format: datekit::DEFAULT_TIME_PATTERN.to_string(),
            datetime_format: datekit::DEFAULT_DATE_TIME_PATTERN.to_string(),
        }
    }
}

impl HelpersConfig {
    /// Load from the resolved config path
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_file()?)
    }

    /// Load from `path`, falling back to defaults when the file is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("Config file does not exist, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: HelpersConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(path, &content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        log::debug!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.week_start()?;

        if NumberFormatter::currency(self.locale(), &self.currency).is_err() {
            return Err(ConfigError::InvalidCurrency(self.currency.clone()));
        }

        if Locale::from_tag(&self.locale).is_none() {
            log::warn!("Unknown locale '{}', numbers use {}", self.locale, Locale::default());
        }
        if constkit::Country::from_code(&self.country).is_none() {
            log::warn!("Unknown country '{}'", self.country);
        }
        Ok(())
    }

    /// Number formatting locale (unknown tags resolve to en-US)
    pub fn locale(&self) -> Locale {
        Locale::resolve(&self.locale)
    }

    pub fn week_start(&self) -> Result<Weekday, ConfigError> {
        self.week_start
            .trim()
            .parse()
            .map_err(|_| ConfigError::UnknownWeekday(self.week_start.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = HelpersConfig::default();
        assert_eq!(config.locale, "en-US");
        assert_eq!(config.currency, "USD");
        assert_eq!(config.country, "US");
        assert_eq!(config.week_start().unwrap(), Weekday::Sun);
        assert_eq!(config.date_format, "yyyy-MM-dd");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = HelpersConfig::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, HelpersConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "locale = \"de-DE\"\nweek_start = \"monday\"\n").unwrap();

        let config = HelpersConfig::load_from(&path).unwrap();
        assert_eq!(config.locale().tag, "de-DE");
        assert_eq!(config.week_start().unwrap(), Weekday::Mon);
        assert_eq!(config.currency, "USD");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = HelpersConfig {
            currency: "EUR".to_string(),
            date_format: "dd/MM/yyyy".to_string(),
            ..Default::default()
        };

        config.save_to(&path).unwrap();
        assert_eq!(HelpersConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_rejects_unknown_week_day() {
        let config = HelpersConfig {
            week_start: "someday".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnknownWeekday("someday".to_string()))
        );
    }

    #[test]
    fn test_rejects_malformed_currency() {
        let config = HelpersConfig {
            currency: "US1".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidCurrency("US1".to_string()))
        );
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "week_start = \"funday\"\n").unwrap();

        let err = HelpersConfig::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("funday"));
    }
}
