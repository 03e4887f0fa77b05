//! CLI module
//!
//! - Argument parsing with clap
//! - Configuration merging (config files + environment + CLI overrides)
//! - Command execution

pub mod executor;
pub mod parser;
pub mod validation;

// Re-export public types for convenience
pub use executor::execute_command;
pub use parser::{Cli, Commands};

use crate::config::{ConfigLoader, Settings};
use crate::logger::init_logger;

/// Load configuration and apply CLI overrides
///
/// 1. Load settings from `--config` or the layered configuration directory
/// 2. Apply `--webhook`, `--verbose` and `--quiet`
/// 3. Validate the final settings
pub fn load_and_merge_config(cli: &Cli) -> anyhow::Result<Settings> {
    let loader = match cli.config {
        Some(ref path) => ConfigLoader::from_file(path),
        None => ConfigLoader::new()?,
    };

    let mut settings = loader.load_unvalidated()?;
    merge_cli_args(&mut settings, cli);
    settings.validate()?;

    Ok(settings)
}

fn merge_cli_args(settings: &mut Settings, cli: &Cli) {
    if let Some(ref url) = cli.webhook {
        settings.webhook.url = url.clone();
    }
    if let Some(level) = cli.log_level_override() {
        settings.logger.level = level.to_string();
    }
}

/// Initialize logger from settings
pub fn init_logger_from_settings(settings: &Settings) -> anyhow::Result<()> {
    let logger_config = settings.logger.clone().into_logger_config()?;
    init_logger(logger_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support::{ENV_LOCK, EnvGuard};
    use clap::Parser;

    #[test]
    fn test_merge_cli_args_overrides() {
        let cli = Cli::try_parse_from([
            "wecom-notifier",
            "--webhook",
            "https://example.com/cli",
            "--verbose",
            "markdown",
            "x",
        ])
        .unwrap();

        let mut settings = Settings::default();
        settings.webhook.url = "https://example.com/file".to_string();
        merge_cli_args(&mut settings, &cli);

        assert_eq!(settings.webhook.url, "https://example.com/cli");
        assert_eq!(settings.logger.level, "debug");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_merge_keeps_config_values() {
        let cli = Cli::try_parse_from(["wecom-notifier", "markdown", "x"]).unwrap();

        let mut settings = Settings::default();
        settings.webhook.url = "https://example.com/file".to_string();
        settings.logger.level = "warn".to_string();
        merge_cli_args(&mut settings, &cli);

        assert_eq!(settings.webhook.url, "https://example.com/file");
        assert_eq!(settings.logger.level, "warn");
    }

    #[test]
    fn test_load_and_merge_from_config_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        let mut env = EnvGuard::new();
        env.clear_wecom();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bot.toml");
        std::fs::write(&path, "[webhook]\nurl = \"https://example.com/file\"\nrate_limit = 3\n")
            .unwrap();

        let cli = Cli::try_parse_from([
            "wecom-notifier",
            "--config",
            path.to_str().unwrap(),
            "--quiet",
            "markdown",
            "x",
        ])
        .unwrap();

        let settings = load_and_merge_config(&cli).unwrap();
        assert_eq!(settings.webhook.url, "https://example.com/file");
        assert_eq!(settings.webhook.rate_limit, 3);
        assert_eq!(settings.logger.level, "error");
    }
}
