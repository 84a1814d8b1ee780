//! HTTP transport collaborator.
//!
//! Nodes never hold a reqwest client directly; they go through the
//! [`HttpTransport`] trait so executions can be tested against a
//! recording fake with no network involved.

use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;
use thiserror::Error;

/// A raw HTTP response: status code plus body bytes, nothing decoded.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Transport-level failures, distinct from upstream error statuses.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("transport error: {0}")]
    Other(String),
}

/// One bounded HTTP GET. A single attempt, no retries at this layer.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse, TransportError>;
}

/// Production transport backed by reqwest.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn map_reqwest_error(err: reqwest::Error, timeout: Duration) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(timeout)
    } else if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else {
        TransportError::Other(err.to_string())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| map_reqwest_error(e, timeout))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| map_reqwest_error(e, timeout))?
            .to_vec();

        Ok(HttpResponse { status, body })
    }
}

/// Recording fake for tests: returns a canned result and remembers
/// every URL it was asked to fetch.
pub struct RecordingTransport {
    requests: Mutex<Vec<String>>,
    result: Result<HttpResponse, TransportError>,
}

impl RecordingTransport {
    /// Fake that answers every GET with the given status and body.
    pub fn respond_with(status: u16, body: &[u8]) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            result: Ok(HttpResponse {
                status,
                body: body.to_vec(),
            }),
        }
    }

    /// Fake that fails every GET with the given transport error.
    pub fn fail_with(err: TransportError) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            result: Err(err),
        }
    }

    /// URLs fetched so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn get(&self, url: &str, _timeout: Duration) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.result.clone()
    }
}
