//! Notifier error types

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while sending a message to the webhook
#[derive(Debug, Error)]
pub enum NotifierError {
    /// Network, DNS or TLS failure before a response was read
    #[error("Transport error: {0}")]
    Transport(String),

    /// Request did not complete within the timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Response body was not a JSON object
    #[error("Malformed response (HTTP {status}): {reason}")]
    MalformedResponse {
        status: u16,
        reason: String,
        body: String,
    },

    /// Endpoint answered with a non-zero or missing `errcode`
    #[error("Webhook rejected message: errcode={errcode:?}, errmsg={errmsg:?}")]
    Rejected {
        errcode: Option<i64>,
        errmsg: Option<String>,
        /// Full response body, kept verbatim for diagnostics
        body: String,
    },

    /// The client session has already been closed
    #[error("Client is closed")]
    Closed,

    /// Client configuration or session construction failed
    #[error("Failed to build client: {0}")]
    Build(String),

    /// Payload could not be serialized
    #[error("Failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}

impl NotifierError {
    /// Create a new transport error
    pub fn transport(message: impl Into<String>) -> Self {
        NotifierError::Transport(message.into())
    }

    /// Create a new build error
    pub fn build(message: impl Into<String>) -> Self {
        NotifierError::Build(message.into())
    }

    /// `errcode` reported by the endpoint, if the failure came from it
    pub fn errcode(&self) -> Option<i64> {
        match self {
            NotifierError::Rejected { errcode, .. } => *errcode,
            _ => None,
        }
    }

    /// Whether the message never reached a well-formed endpoint answer
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            NotifierError::Transport(_)
                | NotifierError::Timeout(_)
                | NotifierError::MalformedResponse { .. }
        )
    }
}

impl From<reqwest::Error> for NotifierError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            NotifierError::Build(err.to_string())
        } else {
            NotifierError::Transport(err.to_string())
        }
    }
}
