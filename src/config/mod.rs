//! Configuration management
//!
//! Layered configuration loading with support for:
//! - TOML configuration files
//! - Environment variable overrides
//!
//! # Configuration Priority (lowest to highest)
//! 1. `default.toml` - Base configuration
//! 2. `local.toml` - Local overrides (not committed to version control)
//! 3. `WECOM_*` environment variables

pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export public types
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{LoggerSettings, Settings, WebhookSettings};
