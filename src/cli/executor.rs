//! Command executor for dispatching CLI commands
//!
//! Builds a [`NotifierClient`] from the merged settings, runs the requested
//! command and closes the client before returning.

use std::path::PathBuf;

use anyhow::Context;
use tracing::{error, info};

use super::parser::{Cli, Commands};
use crate::config::Settings;
use crate::notifier::{NotifierClient, SendResult};

/// Execute a CLI command with the given settings.
///
/// Returns `Ok(true)` when every message was accepted by the endpoint and
/// `Ok(false)` when at least one was not. Errors are reserved for problems
/// that prevent sending at all (client construction, unreadable files).
pub async fn execute_command(cli: &Cli, settings: Settings) -> anyhow::Result<bool> {
    let mut client = NotifierClient::new(settings.webhook.client_config())
        .context("Failed to create notifier client")?;

    let outcome = run(&client, &cli.command).await;
    client.close();
    outcome
}

async fn run(client: &NotifierClient, command: &Commands) -> anyhow::Result<bool> {
    match command {
        Commands::Text {
            content,
            mentions,
            mention_mobiles,
        } => {
            let users: Vec<&str> = mentions.iter().map(String::as_str).collect();
            let phones: Vec<&str> = mention_mobiles.iter().map(String::as_str).collect();
            Ok(report(client.send_text(content, &users, &phones).await))
        }
        Commands::Markdown { content } => Ok(report(client.send_markdown(content).await)),
        Commands::Batch { files } => {
            let contents = read_batch_files(files).await?;
            let result = client.send_markdown_batch(&contents).await;
            info!(succeeded = result.succeeded, failed = result.failed, "Batch complete");
            Ok(result.all_succeeded())
        }
    }
}

fn report(result: SendResult) -> bool {
    match result {
        Ok(delivery) => {
            info!(duration_ms = delivery.duration_ms, "Delivered");
            true
        }
        Err(e) => {
            error!(error = %e, "Delivery failed");
            false
        }
    }
}

async fn read_batch_files(files: &[PathBuf]) -> anyhow::Result<Vec<String>> {
    let mut contents = Vec::with_capacity(files.len());
    for path in files {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        contents.push(content);
    }
    Ok(contents)
}
