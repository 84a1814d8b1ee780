//! Output artifacts and the sink nodes publish them through.

use std::sync::Mutex;

/// A value flowing along a graph edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    /// Reference URL to a persisted image
    ImageUrl(String),
    /// Plain text, e.g. a status message
    Text(String),
}

impl Artifact {
    /// The inner string, whichever variant this is.
    pub fn as_str(&self) -> &str {
        match self {
            Artifact::ImageUrl(url) => url,
            Artifact::Text(text) => text,
        }
    }
}

/// Where a node publishes its named outputs during an execution.
///
/// Publishing is fire-and-forget from the node's point of view; the host
/// owns delivery to downstream nodes.
pub trait OutputSink: Send + Sync {
    fn publish(&self, output: &str, artifact: Artifact);
}

/// Sink that logs each published output. Used by the standalone runner.
pub struct LogSink;

impl OutputSink for LogSink {
    fn publish(&self, output: &str, artifact: Artifact) {
        log::info!("output {}: {}", output, artifact.as_str());
    }
}

/// Recording sink for tests: remembers every published output.
#[derive(Default)]
pub struct RecordingSink {
    published: Mutex<Vec<(String, Artifact)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Published `(output, artifact)` pairs, in order.
    pub fn published(&self) -> Vec<(String, Artifact)> {
        self.published.lock().unwrap().clone()
    }

    /// All artifacts published under the given output name.
    pub fn values_for(&self, output: &str) -> Vec<Artifact> {
        self.published
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, _)| name == output)
            .map(|(_, artifact)| artifact.clone())
            .collect()
    }
}

impl OutputSink for RecordingSink {
    fn publish(&self, output: &str, artifact: Artifact) {
        self.published
            .lock()
            .unwrap()
            .push((output.to_string(), artifact));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_preserves_order() {
        let sink = RecordingSink::new();
        sink.publish("image", Artifact::ImageUrl("file:///a.jpg".into()));
        sink.publish("status", Artifact::Text("ok".into()));

        let published = sink.published();
        assert_eq!(published.len(), 2);
        assert_eq!(published[0].0, "image");
        assert_eq!(published[1].1, Artifact::Text("ok".into()));
    }

    #[test]
    fn values_for_filters_by_output_name() {
        let sink = RecordingSink::new();
        sink.publish("status", Artifact::Text("one".into()));
        sink.publish("other", Artifact::Text("x".into()));
        sink.publish("status", Artifact::Text("two".into()));

        let statuses = sink.values_for("status");
        assert_eq!(
            statuses,
            vec![Artifact::Text("one".into()), Artifact::Text("two".into())]
        );
    }
}
