//! HTTP transport used by the notifier client.
//!
//! The [`Transport`] trait is the seam between message handling and the
//! network. [`HttpTransport`] is the production implementation: one pooled
//! `reqwest::Client` created up front and reused for every request.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;

use super::error::NotifierError;

/// Status and body of an HTTP response, before any interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one JSON POST request and returns the raw response.
///
/// Implementations perform exactly one attempt per call.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(
        &self,
        url: &str,
        body: &Value,
        timeout: Duration,
    ) -> Result<RawResponse, NotifierError>;
}

/// reqwest-backed transport with a persistent connection pool.
///
/// # Features
/// - `Content-Type: application/json` set once as a default header
/// - 10s connect timeout; the per-request timeout is supplied by the caller
/// - Rustls for TLS
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Builds the session. No network traffic happens here.
    pub fn new() -> Result<Self, NotifierError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            // Timeouts
            .connect_timeout(Duration::from_secs(10))
            // Connection pooling
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| NotifierError::build(e.to_string()))?;

        Ok(Self { client })
    }
}

fn map_reqwest_error(err: reqwest::Error, timeout: Duration) -> NotifierError {
    if err.is_timeout() {
        NotifierError::Timeout(timeout)
    } else {
        NotifierError::from(err)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(
        &self,
        url: &str,
        body: &Value,
        timeout: Duration,
    ) -> Result<RawResponse, NotifierError> {
        let response = self
            .client
            .post(url)
            .timeout(timeout)
            .json(body)
            .send()
            .await
            .map_err(|e| map_reqwest_error(e, timeout))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| map_reqwest_error(e, timeout))?;

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_builds_without_network() {
        assert!(HttpTransport::new().is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let transport = HttpTransport::new().unwrap();
        // Port 9 (discard) on loopback is not expected to accept HTTP
        let result = transport
            .post_json(
                "http://127.0.0.1:9/cgi-bin/webhook/send",
                &serde_json::json!({"msgtype": "text"}),
                Duration::from_secs(2),
            )
            .await;

        let err = result.unwrap_err();
        assert!(err.is_transport(), "unexpected error: {err:?}");
    }

    #[tokio::test]
    async fn test_silent_endpoint_times_out() {
        // Accepts the connection but never answers
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let transport = HttpTransport::new().unwrap();
        let timeout = Duration::from_millis(300);
        let err = transport
            .post_json(
                &format!("http://{addr}/cgi-bin/webhook/send"),
                &serde_json::json!({"msgtype": "text"}),
                timeout,
            )
            .await
            .unwrap_err();

        assert!(
            matches!(err, NotifierError::Timeout(t) if t == timeout),
            "unexpected error: {err:?}"
        );
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_invalid_url_is_reported() {
        let transport = HttpTransport::new().unwrap();
        let result = transport
            .post_json("not a url", &serde_json::json!({}), Duration::from_secs(1))
            .await;
        assert!(result.is_err());
    }
}
