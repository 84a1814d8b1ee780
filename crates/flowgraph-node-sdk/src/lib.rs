//! Host-side contract for flowgraph plugin nodes.
//!
//! The host runtime owns parameter storage, the credential store, static
//! file persistence, and execution scheduling. This crate is the slice of
//! that runtime a node actually touches: the [`GraphNode`] lifecycle trait,
//! the collaborator traits ([`ConfigStore`], [`StaticFileStore`],
//! [`HttpTransport`], [`OutputSink`]), the shared [`NodeError`] taxonomy,
//! and a [`run_node`] runner for driving a node outside the full host.
//!
//! # Example
//!
//! ```ignore
//! use flowgraph_node_sdk::prelude::*;
//!
//! struct MyNode {
//!     ctx: HostContext,
//!     config: MyConfig,
//! }
//!
//! #[async_trait]
//! impl GraphNode for MyNode {
//!     type Config = MyConfig;
//!
//!     fn metadata() -> NodeMetadata {
//!         node_metadata!(outputs: &["result", "status"])
//!     }
//!
//!     fn new(ctx: HostContext, config: MyConfig) -> Result<Self, NodeError> {
//!         Ok(Self { ctx, config })
//!     }
//!
//!     fn validate(&self) -> Vec<String> {
//!         Vec::new()
//!     }
//!
//!     async fn process(&self, outputs: &dyn OutputSink) -> Result<(), NodeError> {
//!         outputs.publish("status", Artifact::Text("done".into()));
//!         Ok(())
//!     }
//! }
//! ```

pub mod artifact;
pub mod config;
pub mod error;
pub mod http;
pub mod storage;

pub use artifact::{Artifact, LogSink, OutputSink, RecordingSink};
pub use config::{load_config, parse_config, ConfigStore, EnvConfigStore, MemoryConfigStore};
pub use error::NodeError;
pub use http::{
    HttpResponse, HttpTransport, RecordingTransport, ReqwestTransport, TransportError,
};
pub use storage::{LocalStaticFileStore, MemoryFileStore, StaticFileStore};

// Re-exports for convenience (so nodes don't need to add these deps)
pub use async_trait;
pub use log;

use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Convenience imports for node implementations.
pub mod prelude {
    pub use crate::artifact::{Artifact, OutputSink};
    pub use crate::error::NodeError;
    pub use crate::node_metadata;
    pub use crate::{GraphNode, HostContext, NodeMetadata};
    pub use async_trait::async_trait;
}

/// Metadata about a plugin node, used for discovery and logging.
///
/// Use the `node_metadata!` macro to generate this from Cargo.toml:
/// ```rust,ignore
/// fn metadata() -> NodeMetadata {
///     node_metadata!(outputs: &["street_view_image", "status"])
/// }
/// ```
#[derive(Debug, Clone)]
pub struct NodeMetadata {
    /// Short name identifier from CARGO_PKG_NAME
    pub name: &'static str,
    /// SemVer version string from CARGO_PKG_VERSION
    pub version: &'static str,
    /// Human-readable description from CARGO_PKG_DESCRIPTION
    pub description: &'static str,
    /// Names of the outputs this node publishes
    pub outputs: &'static [&'static str],
}

/// Generate [`NodeMetadata`] from the package's Cargo.toml manifest,
/// so only the output names need to be spelled out.
#[macro_export]
macro_rules! node_metadata {
    (outputs: $outputs:expr $(,)?) => {
        $crate::NodeMetadata {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            outputs: $outputs,
        }
    };
}

/// Host collaborators handed to a node at construction time.
///
/// Everything is behind a trait object so tests can substitute recording
/// fakes; the node never reaches into ambient global state.
#[derive(Clone)]
pub struct HostContext {
    /// Credential/config store lookup
    pub config_store: Arc<dyn ConfigStore>,
    /// Static file persistence service
    pub file_store: Arc<dyn StaticFileStore>,
    /// HTTP transport for outbound calls
    pub http: Arc<dyn HttpTransport>,
}

/// The lifecycle every flowgraph node implements.
///
/// 1. `metadata()` — static information about the node
/// 2. `new()` — construct from config plus host collaborators
/// 3. `validate()` — pre-flight pass; a non-empty result blocks execution
/// 4. `process()` — one execution, publishing outputs through the sink
#[async_trait::async_trait]
pub trait GraphNode: Send + Sync + Sized {
    /// Node-specific parameter set, deserializable from YAML.
    type Config: DeserializeOwned + Send;

    /// Return metadata about this node.
    fn metadata() -> NodeMetadata;

    /// Create a new instance of the node.
    fn new(ctx: HostContext, config: Self::Config) -> Result<Self, NodeError>;

    /// Pre-flight validation. Every rule is checked independently so
    /// multiple problems surface in one pass; empty means valid.
    fn validate(&self) -> Vec<String>;

    /// Run one execution. Each execution is independent and stateless;
    /// outputs go through the sink, fatal errors propagate to the host.
    async fn process(&self, outputs: &dyn OutputSink) -> Result<(), NodeError>;
}

/// Initialize logging with env_logger.
///
/// Respects RUST_LOG environment variable. Defaults to "info" level.
pub fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Drive one node execution: construct, validate, process.
///
/// Validation failures are logged and returned without `process()` ever
/// running, so no outbound call is attempted for an invalid parameter set.
pub async fn run_node<N: GraphNode>(
    ctx: HostContext,
    config: N::Config,
    outputs: &dyn OutputSink,
) -> Result<(), NodeError> {
    let metadata = N::metadata();
    log::info!("Starting {} v{}", metadata.name, metadata.version);

    let node = N::new(ctx, config)?;

    let issues = node.validate();
    if !issues.is_empty() {
        for issue in &issues {
            log::error!("Validation: {}", issue);
        }
        return Err(NodeError::Validation(issues));
    }

    node.process(outputs).await
}
