//! Webhook client for the group robot.
//!
//! [`NotifierClient`] owns one HTTP session for its lifetime, encodes
//! [`OutboundMessage`]s, posts them and interprets the `errcode` field of the
//! reply. Every failure comes back as a typed [`NotifierError`]; nothing
//! panics and nothing is retried.
//!
//! The client is meant for one owner at a time. Sends are sequential: each
//! call completes one round trip before returning, and the pacing of
//! [`NotifierClient::send_markdown_batch`] only holds within a single batch.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::error::NotifierError;
use super::message::OutboundMessage;
use super::pacer::{Pacer, TokioPacer};
use super::transport::{HttpTransport, RawResponse, Transport};

/// Per-request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fixed wait between two messages of a batch
pub const BATCH_PACING_DELAY: Duration = Duration::from_secs(1);

/// Messages per minute the endpoint tolerates
pub const DEFAULT_RATE_LIMIT: u32 = 20;

fn default_rate_limit() -> u32 {
    DEFAULT_RATE_LIMIT
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Webhook URL including its key; the only credential
    pub webhook_url: String,

    /// Stored for callers that run their own limiter; not enforced here
    #[serde(default = "default_rate_limit")]
    pub rate_limit: u32,
}

impl ClientConfig {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            rate_limit: DEFAULT_RATE_LIMIT,
        }
    }

    pub fn with_rate_limit(mut self, rate_limit: u32) -> Self {
        self.rate_limit = rate_limit;
        self
    }
}

/// Details of an accepted message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    /// HTTP status of the response
    pub status: u16,
    /// `errmsg` echoed by the endpoint, usually `"ok"`
    pub errmsg: Option<String>,
    /// Round-trip time in milliseconds
    pub duration_ms: u64,
}

/// Outcome of a single send
pub type SendResult = Result<Delivery, NotifierError>;

/// Tallies of a batch send
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchResult {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchResult {
    /// Number of messages attempted
    pub fn attempted(&self) -> usize {
        self.succeeded + self.failed
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Client for posting messages to a group robot webhook
pub struct NotifierClient {
    config: ClientConfig,
    transport: Option<Box<dyn Transport>>,
    pacer: Box<dyn Pacer>,
}

impl NotifierClient {
    /// Creates a client with a pooled reqwest session.
    ///
    /// # Errors
    /// Returns [`NotifierError::Build`] if the webhook URL is empty or the
    /// HTTP session cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, NotifierError> {
        let transport = HttpTransport::new()?;
        Self::with_transport(config, transport, TokioPacer)
    }

    /// Creates a client over any transport and pacer
    pub fn with_transport(
        config: ClientConfig,
        transport: impl Transport + 'static,
        pacer: impl Pacer + 'static,
    ) -> Result<Self, NotifierError> {
        if config.webhook_url.trim().is_empty() {
            return Err(NotifierError::build("webhook url must not be empty"));
        }

        Ok(Self {
            config,
            transport: Some(Box::new(transport)),
            pacer: Box::new(pacer),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn rate_limit(&self) -> u32 {
        self.config.rate_limit
    }

    pub fn is_closed(&self) -> bool {
        self.transport.is_none()
    }

    /// Sends a markdown message
    pub async fn send_markdown(&self, content: &str) -> SendResult {
        self.send_message(&OutboundMessage::markdown(content)).await
    }

    /// Sends a text message, mentioning the given users and phone numbers.
    ///
    /// Empty mention lists are left out of the payload.
    pub async fn send_text(
        &self,
        content: &str,
        mentioned_users: &[&str],
        mentioned_phones: &[&str],
    ) -> SendResult {
        let message = OutboundMessage::text(content)
            .with_mentioned_users(mentioned_users.iter().copied())
            .with_mentioned_phones(mentioned_phones.iter().copied());
        self.send_message(&message).await
    }

    /// Sends a prepared message and logs the outcome
    pub async fn send_message(&self, message: &OutboundMessage) -> SendResult {
        let msgtype = message.msgtype();
        let result = self.dispatch(message).await;

        match &result {
            Ok(delivery) => {
                info!(msgtype, duration_ms = delivery.duration_ms, "Message sent successfully");
            }
            Err(NotifierError::Rejected { body, .. }) => {
                error!(msgtype, response = %body, "Message send failed");
            }
            Err(e) => {
                error!(msgtype, error = %e, "Message send raised an error");
            }
        }

        result
    }

    /// Sends markdown messages one after another.
    ///
    /// Waits [`BATCH_PACING_DELAY`] between consecutive messages, never after
    /// the last. A failed message is counted and the batch moves on. A closed
    /// client fails every message at once, so no pause is taken.
    pub async fn send_markdown_batch<S: AsRef<str>>(&self, contents: &[S]) -> BatchResult {
        let total = contents.len();
        let mut result = BatchResult::default();

        for (index, content) in contents.iter().enumerate() {
            let position = index + 1;
            info!("Sending message {}/{}", position, total);

            match self.send_markdown(content.as_ref()).await {
                Ok(_) => result.succeeded += 1,
                Err(_) => result.failed += 1,
            }

            if position < total && !self.is_closed() {
                self.pacer.pause(BATCH_PACING_DELAY).await;
            }
        }

        info!(
            succeeded = result.succeeded,
            failed = result.failed,
            "Batch send finished"
        );
        result
    }

    /// Releases the HTTP session. Later sends fail with [`NotifierError::Closed`].
    pub fn close(&mut self) {
        match self.transport.take() {
            Some(transport) => {
                drop(transport);
                info!("Notifier session closed");
            }
            None => warn!("Notifier session already closed"),
        }
    }

    async fn dispatch(&self, message: &OutboundMessage) -> SendResult {
        let transport = self.transport.as_deref().ok_or(NotifierError::Closed)?;
        let payload = message.encode()?;
        debug!(payload = %payload, "Posting webhook payload");

        let start = Instant::now();
        let raw = transport
            .post_json(&self.config.webhook_url, &payload, REQUEST_TIMEOUT)
            .await?;
        let duration_ms = start.elapsed().as_millis() as u64;

        interpret_response(raw, duration_ms)
    }
}

/// Maps a raw response onto a send outcome.
///
/// Only the body decides: `errcode == 0` is success whatever the HTTP status.
fn interpret_response(raw: RawResponse, duration_ms: u64) -> SendResult {
    let RawResponse { status, body } = raw;

    let value: Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(e) => {
            return Err(NotifierError::MalformedResponse {
                status,
                reason: e.to_string(),
                body,
            });
        }
    };

    let Some(object) = value.as_object() else {
        return Err(NotifierError::MalformedResponse {
            status,
            reason: "expected a JSON object".to_string(),
            body,
        });
    };

    let errcode = object.get("errcode").and_then(errcode_value);
    let errmsg = object
        .get("errmsg")
        .and_then(Value::as_str)
        .map(str::to_owned);

    match errcode {
        Some(0) => Ok(Delivery {
            status,
            errmsg,
            duration_ms,
        }),
        _ => Err(NotifierError::Rejected {
            errcode,
            errmsg,
            body,
        }),
    }
}

/// Reads `errcode` as an integer; integral floats such as `0.0` count too
fn errcode_value(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|code| code.fract() == 0.0)
            .map(|code| code as i64)
    })
}
