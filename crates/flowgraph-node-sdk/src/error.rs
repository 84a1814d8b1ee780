//! Error types shared by flowgraph nodes.

use thiserror::Error;

use crate::http::TransportError;

/// Errors that can occur during a node execution.
#[derive(Debug, Error)]
pub enum NodeError {
    /// Configuration file not found or a required config value is missing
    #[error("Config error: {0}")]
    Config(String),

    /// Failed to parse configuration YAML
    #[error("Parse error: {0}")]
    Parse(String),

    /// Pre-flight validation failed; the execution never started
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// The remote API answered with an error status
    #[error("{0}")]
    Upstream(String),

    /// The HTTP call itself failed (timeout, connection refused)
    #[error("{0}")]
    Transport(#[from] TransportError),

    /// The file persistence collaborator failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Generic I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_yaml::Error> for NodeError {
    fn from(err: serde_yaml::Error) -> Self {
        NodeError::Parse(err.to_string())
    }
}
