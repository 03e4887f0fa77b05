//! Errors raised while loading the notifier configuration
//!
//! Sending never produces these; they surface before a client exists, when
//! the webhook URL or logger settings cannot be resolved.

use thiserror::Error;

/// Why the notifier settings could not be loaded
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `WECOM_CONFIG_FILE` or `--config` names a file that does not exist
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// The merged sources do not deserialize into `Settings`
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// A setting is present but unusable, e.g. an empty `webhook.url` or an
    /// unknown `logger.level`
    #[error("Validation error: {field} - {message}")]
    ValidationError {
        /// Dotted key, such as `webhook.url`
        field: String,
        message: String,
    },

    /// `WECOM_CONFIG_DIR` and `WECOM_CONFIG_FILE` were both set
    #[error("Mutual exclusivity error: {0}")]
    MutualExclusivityError(String),

    /// Raised by the `config` crate while reading a TOML source
    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

impl ConfigError {
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        ConfigError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// No webhook URL in any file, in `WECOM_WEBHOOK__URL` or on the command line
    pub fn missing_webhook_url() -> Self {
        Self::validation(
            "webhook.url",
            "Webhook URL is required. Set it in the config file, via WECOM_WEBHOOK__URL or with --webhook.",
        )
    }

    pub fn file_not_found<S: Into<String>>(path: S) -> Self {
        ConfigError::FileNotFound(path.into())
    }

    pub fn mutual_exclusivity<S: Into<String>>(message: S) -> Self {
        ConfigError::MutualExclusivityError(message.into())
    }
}
