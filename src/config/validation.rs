//! Configuration validation logic

use crate::config::error::ConfigError;
use crate::config::settings::{LoggerSettings, Settings, WebhookSettings};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl WebhookSettings {
    /// Validate webhook configuration
    ///
    /// The URL is opaque to the client; only its presence is checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::missing_webhook_url());
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        let format = self.format.to_lowercase();
        if !VALID_LOG_FORMATS.contains(&format.as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

impl Settings {
    /// Validate all configuration sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.webhook.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_settings() -> Settings {
        Settings {
            webhook: WebhookSettings {
                url: "https://qyapi.weixin.qq.com/cgi-bin/webhook/send?key=k".to_string(),
                rate_limit: 20,
            },
            logger: LoggerSettings::default(),
        }
    }

    #[test]
    fn test_valid_settings() {
        assert!(valid_settings().validate().is_ok());
    }

    #[test]
    fn test_missing_webhook_url() {
        let mut settings = valid_settings();
        settings.webhook.url = "   ".to_string();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("webhook.url"));
    }

    #[test]
    fn test_url_is_not_otherwise_checked() {
        let mut settings = valid_settings();
        settings.webhook.url = "anything-goes".to_string();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut settings = valid_settings();
        settings.logger.level = "verbose".to_string();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("logger.level"));
    }

    #[test]
    fn test_invalid_log_format() {
        let mut settings = valid_settings();
        settings.logger.format = "xml".to_string();
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("logger.format"));
    }

    #[test]
    fn test_log_level_case_insensitive() {
        let mut settings = valid_settings();
        settings.logger.level = "DEBUG".to_string();
        settings.logger.format = "Json".to_string();
        assert!(settings.validate().is_ok());
    }
}
