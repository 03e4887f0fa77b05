//! wecom-notifier
//!
//! Client for posting text and markdown messages to a WeCom group robot
//! webhook, plus the configuration, logging and CLI plumbing around it.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod logger;
pub mod notifier;

pub use notifier::{
    BatchResult, ClientConfig, Delivery, NotifierClient, NotifierError, OutboundMessage,
    SendResult,
};

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}
