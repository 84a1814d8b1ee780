//! Classification of Street View API responses.

use thiserror::Error;

/// Why an upstream response was not an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// 404 — no panorama within the search radius
    NoImagery,
    /// 400 — the request itself was malformed
    BadRequest,
    /// 403 — bad key or quota exhausted
    AuthOrQuota,
    /// Any other non-200 status
    UpstreamError,
}

/// A non-200 answer from the Street View API.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct UpstreamFailure {
    pub kind: FailureKind,
    pub message: String,
}

/// Map a status code and body to image bytes or a categorized failure.
///
/// One classification per call; retrying is not this layer's business.
pub fn classify(status: u16, body: Vec<u8>) -> Result<Vec<u8>, UpstreamFailure> {
    match status {
        200 => Ok(body),
        404 => Err(UpstreamFailure {
            kind: FailureKind::NoImagery,
            message: "No Street View imagery available for this location.".to_string(),
        }),
        400 => Err(UpstreamFailure {
            kind: FailureKind::BadRequest,
            message: "Invalid request parameters.".to_string(),
        }),
        403 => Err(UpstreamFailure {
            kind: FailureKind::AuthOrQuota,
            message: "API key invalid or quota exceeded.".to_string(),
        }),
        code => Err(UpstreamFailure {
            kind: FailureKind::UpstreamError,
            message: format!("Street View API error: {code}"),
        }),
    }
}
