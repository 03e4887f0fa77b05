//! Configuration settings structures
//!
//! These structures are loaded from TOML files and `WECOM_*` environment
//! variables by [`ConfigLoader`](crate::config::ConfigLoader).

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, LogFormat, LoggerConfig};
use crate::notifier::{ClientConfig, DEFAULT_RATE_LIMIT};

// ============================================================================
// Default value functions
// ============================================================================

fn default_rate_limit() -> u32 {
    DEFAULT_RATE_LIMIT
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "full".to_string()
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Webhook Configuration
// ============================================================================

/// Group robot webhook configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookSettings {
    /// Webhook URL, e.g. `https://qyapi.weixin.qq.com/cgi-bin/webhook/send?key=...`
    #[serde(default)]
    pub url: String,

    /// Messages per minute; kept for callers, not enforced by the client
    #[serde(default = "default_rate_limit")]
    pub rate_limit: u32,
}

impl Default for WebhookSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            rate_limit: default_rate_limit(),
        }
    }
}

impl WebhookSettings {
    /// Convert to the client configuration
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.url.clone()).with_rate_limit(self.rate_limit)
    }
}

// ============================================================================
// Logger Configuration
// ============================================================================

/// Logger configuration as it appears in configuration files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: "full", "compact", "json"
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Use ANSI colors when stdout is a terminal
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            colored: default_true(),
        }
    }
}

impl LoggerSettings {
    /// Convert LoggerSettings to the runtime LoggerConfig
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let format: LogFormat = self.format.parse().map_err(|e: anyhow::Error| {
            ConfigError::validation("logger.format".to_string(), e.to_string())
        })?;

        LoggerConfig::new(ConsoleConfig::new(true, self.colored), format, self.level).map_err(
            |e| ConfigError::ValidationError {
                field: "logger".to_string(),
                message: e.to_string(),
            },
        )
    }
}

// ============================================================================
// Root Settings
// ============================================================================

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Webhook configuration
    #[serde(default)]
    pub webhook: WebhookSettings,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert!(settings.webhook.url.is_empty());
        assert_eq!(settings.webhook.rate_limit, 20);
        assert_eq!(settings.logger.level, "info");
        assert_eq!(settings.logger.format, "full");
        assert!(settings.logger.colored);
    }

    #[test]
    fn test_client_config_conversion() {
        let webhook = WebhookSettings {
            url: "https://example.com/hook?key=abc".to_string(),
            rate_limit: 7,
        };
        let config = webhook.client_config();
        assert_eq!(config.webhook_url, "https://example.com/hook?key=abc");
        assert_eq!(config.rate_limit, 7);
    }

    #[test]
    fn test_logger_settings_conversion() {
        let settings = LoggerSettings {
            level: "debug".to_string(),
            format: "json".to_string(),
            colored: false,
        };
        let config = settings.into_logger_config().unwrap();
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, LogFormat::Json);
        assert!(!config.console.colored);
    }

    #[test]
    fn test_logger_settings_bad_format() {
        let settings = LoggerSettings {
            format: "yaml".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            settings.into_logger_config(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let settings: Settings = config::Config::builder()
            .add_source(config::File::from_str(
                "[webhook]\nurl = \"https://example.com/hook\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.webhook.url, "https://example.com/hook");
        assert_eq!(settings.webhook.rate_limit, 20);
        assert_eq!(settings.logger, LoggerSettings::default());
    }
}
