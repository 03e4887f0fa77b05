//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Post text and markdown messages to a WeCom group robot
#[derive(Parser, Debug)]
#[command(name = "wecom-notifier")]
#[command(about = "Post text and markdown messages to a WeCom group robot")]
#[command(long_about = "
wecom-notifier posts messages to a WeCom (WeChat Work) group robot webhook.
The webhook URL is read from the configuration (default.toml / local.toml in
WECOM_CONFIG_DIR, or WECOM_CONFIG_FILE), from WECOM_WEBHOOK__URL, or from --webhook.

EXAMPLES:
    # Send a plain text message mentioning everyone
    wecom-notifier text \"Deploy finished\" --mention @all

    # Send a markdown message
    wecom-notifier markdown \"**build** <font color=\\\"info\\\">passed</font>\"

    # Send each file as one markdown message, one second apart
    wecom-notifier batch report-1.md report-2.md

    # Use a specific configuration file
    wecom-notifier --config /etc/wecom/notifier.toml markdown \"hello\"
")]
#[command(version = crate::build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    ///
    /// Load a single TOML file instead of the layered configuration directory.
    /// The file must exist and be readable.
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Webhook URL
    ///
    /// Overrides the webhook URL from configuration files and environment.
    #[arg(short, long, value_name = "URL", value_parser = super::validation::validate_non_empty)]
    pub webhook: Option<String>,

    /// Enable verbose logging
    ///
    /// Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a text message
    ///
    /// Examples:
    ///   wecom-notifier text "hello"
    ///   wecom-notifier text "on call" --mention zhangsan --mention-mobile 13800001111
    Text {
        /// Message content
        #[arg(value_parser = super::validation::validate_non_empty)]
        content: String,

        /// User id to mention; repeatable, `@all` mentions everyone
        #[arg(long = "mention", value_name = "USER_ID")]
        mentions: Vec<String>,

        /// Phone number to mention; repeatable
        #[arg(long = "mention-mobile", value_name = "PHONE")]
        mention_mobiles: Vec<String>,
    },
    /// Send a markdown message
    Markdown {
        /// Markdown content
        #[arg(value_parser = super::validation::validate_non_empty)]
        content: String,
    },
    /// Send each file as one markdown message
    ///
    /// Files are sent in the given order with a one second pause between
    /// messages. Exits non-zero if any message failed.
    Batch {
        /// Markdown files to send
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },
}

impl Cli {
    /// Log level implied by --verbose / --quiet, if any
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("error")
        } else {
            None
        }
    }
}
