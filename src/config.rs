use crate::errors::{AppError, AppResult};
use crate::fetch::StalePolicy;
use crate::provider::{parse_endpoint, DEFAULT_ENDPOINT};
use crate::urgency::{UrgencyThresholds, DEFAULT_CRITICAL_HOURS_BELOW, DEFAULT_WARNING_HOURS_BELOW};
use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub use crate::models::DEFAULT_TIMESTAMP_FORMAT;

/// Resolved configuration with all values filled in (no Options).
///
/// Every key is optional in the TOML file; missing keys take the defaults below.
/// Unknown keys are rejected to catch typos.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolvedConfig {
    /// JSON endpoint returning the announcement list
    pub endpoint: String,
    /// Serve the built-in sample dataset instead of calling `endpoint`
    pub demo: bool,
    /// `chrono` format string for the last-update timestamp
    pub timestamp_format: String,
    /// Announcements with fewer hours remaining are critical
    pub critical_hours_below: f64,
    /// Announcements with fewer hours remaining (and not critical) are warnings
    pub warning_hours_below: f64,
    /// What to do with outcomes of superseded refreshes
    pub stale_policy: StalePolicy,
    /// Colour rows by urgency in the terminal
    pub color: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            demo: false,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            critical_hours_below: DEFAULT_CRITICAL_HOURS_BELOW,
            warning_hours_below: DEFAULT_WARNING_HOURS_BELOW,
            stale_policy: StalePolicy::ApplyAll,
            color: true,
        }
    }
}

impl ResolvedConfig {
    pub fn thresholds(&self) -> UrgencyThresholds {
        UrgencyThresholds {
            critical_hours_below: self.critical_hours_below,
            warning_hours_below: self.warning_hours_below,
        }
    }

    /// Checks the endpoint, the urgency thresholds and the timestamp format.
    ///
    /// # Errors
    ///
    /// Returns `UrlError` for a bad endpoint and `InvalidInput` for the rest.
    /// The endpoint is not checked in demo mode.
    pub fn validate(&self) -> AppResult<()> {
        if !self.demo {
            parse_endpoint(&self.endpoint)?;
        }
        self.thresholds().validate()?;

        if self.timestamp_format.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Timestamp format must not be empty".into(),
            ));
        }
        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(AppError::InvalidInput(format!(
                "Invalid timestamp format: {}",
                self.timestamp_format
            )));
        }

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> AppResult<Self> {
        let config: ResolvedConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be read, `InvalidInput` if the TOML is
    /// malformed, contains unknown keys or fails validation, and `UrlError` for
    /// an invalid endpoint.
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::IoError(format!("Failed to read config {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_values() {
        let config = ResolvedConfig::default();
        assert_eq!(config.endpoint, "http://localhost:8002/api/contrataciones");
        assert_eq!(config.critical_hours_below, 24.0);
        assert_eq!(config.warning_hours_below, 72.0);
        assert_eq!(config.stale_policy, StalePolicy::ApplyAll);
        assert!(!config.demo);
        assert!(config.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn minimal_toml_is_parsed_and_defaults_apply() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(
            tmp,
            r#"
            endpoint = "https://seace.example.pe/api/contrataciones"
            "#,
        )
        .unwrap();

        let config = ResolvedConfig::from_toml_file(tmp.path()).unwrap();
        assert_eq!(config.endpoint, "https://seace.example.pe/api/contrataciones");
        assert_eq!(config.timestamp_format, DEFAULT_TIMESTAMP_FORMAT);
        assert_eq!(config.thresholds(), UrgencyThresholds::default());
    }

    #[test]
    fn full_toml_is_parsed() {
        let config = ResolvedConfig::from_toml_str(
            r#"
            demo = true
            timestamp_format = "%Y-%m-%d %H:%M"
            critical_hours_below = 12.0
            warning_hours_below = 48
            stale_policy = "discard-superseded"
            color = false
            "#,
        )
        .unwrap();
        assert!(config.demo);
        assert_eq!(config.critical_hours_below, 12.0);
        assert_eq!(config.warning_hours_below, 48.0);
        assert_eq!(config.stale_policy, StalePolicy::DiscardSuperseded);
        assert!(!config.color);
    }

    #[test]
    fn unknown_key_errors() {
        let err = ResolvedConfig::from_toml_str("poll_interval = 5").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn inverted_thresholds_error() {
        let result = ResolvedConfig::from_toml_str(
            r#"
            critical_hours_below = 72
            warning_hours_below = 24
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn invalid_endpoint_errors_unless_demo() {
        assert!(ResolvedConfig::from_toml_str(r#"endpoint = "nope""#).is_err());
        assert!(ResolvedConfig::from_toml_str(
            r#"
            endpoint = "nope"
            demo = true
            "#
        )
        .is_ok());
    }

    #[test]
    fn invalid_timestamp_format_errors() {
        assert!(ResolvedConfig::from_toml_str(r#"timestamp_format = "%Q""#).is_err());
        assert!(ResolvedConfig::from_toml_str(r#"timestamp_format = "  ""#).is_err());
    }

    #[test]
    fn missing_file_errors() {
        let err = ResolvedConfig::from_toml_file(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, AppError::IoError(_)));
    }
}
