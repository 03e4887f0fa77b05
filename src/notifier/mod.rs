//! Group robot webhook notifier.
//!
//! Builds text and markdown payloads, posts them to the configured webhook
//! and reports the endpoint's verdict as a typed result.

mod client;
mod error;
mod message;
mod pacer;
mod transport;

pub use client::{
    BATCH_PACING_DELAY, BatchResult, ClientConfig, DEFAULT_RATE_LIMIT, Delivery, NotifierClient,
    REQUEST_TIMEOUT, SendResult,
};
pub use error::NotifierError;
pub use message::{MarkdownBody, OutboundMessage, TextBody};
pub use pacer::{Pacer, TokioPacer};
pub use transport::{HttpTransport, RawResponse, Transport};
