//! Configuration loading and the host credential store interface.

use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use crate::error::NodeError;

/// Load node configuration from a YAML file.
pub fn load_config<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, NodeError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .map_err(|e| NodeError::Config(format!("Failed to read {}: {}", path.display(), e)))?;

    serde_yaml::from_str(&contents)
        .map_err(|e| NodeError::Parse(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Parse node configuration from a YAML string.
///
/// Useful for testing or inline configuration.
pub fn parse_config<T: DeserializeOwned>(yaml: &str) -> Result<T, NodeError> {
    serde_yaml::from_str(yaml).map_err(|e| NodeError::Parse(e.to_string()))
}

/// The host's configuration/secrets store, as seen by a node.
///
/// Secrets are addressed by a two-part key: the service they belong to
/// (e.g. `"Google_Maps"`) and the variable name within that service.
/// Nodes never learn where the secret actually lives.
pub trait ConfigStore: Send + Sync {
    /// Look up a secret. `None` means the secret is not configured;
    /// an empty string is treated the same as absent.
    fn get_secret(&self, service: &str, variable: &str) -> Option<String>;
}

/// Config store backed by process environment variables.
///
/// The service part of the key is ignored; the variable name is read
/// directly from the environment. This is what the standalone runner uses.
pub struct EnvConfigStore;

impl ConfigStore for EnvConfigStore {
    fn get_secret(&self, _service: &str, variable: &str) -> Option<String> {
        std::env::var(variable).ok().filter(|v| !v.is_empty())
    }
}

/// In-memory config store for tests and embedding.
#[derive(Default)]
pub struct MemoryConfigStore {
    secrets: Mutex<HashMap<(String, String), String>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, service: &str, variable: &str, value: &str) {
        self.secrets
            .lock()
            .unwrap()
            .insert((service.to_string(), variable.to_string()), value.to_string());
    }
}

impl ConfigStore for MemoryConfigStore {
    fn get_secret(&self, service: &str, variable: &str) -> Option<String> {
        self.secrets
            .lock()
            .unwrap()
            .get(&(service.to_string(), variable.to_string()))
            .filter(|v| !v.is_empty())
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct TestConfig {
        name: String,
        #[serde(default)]
        retries: u32,
    }

    #[test]
    fn load_valid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "name: test\nretries: 3\n").unwrap();
        let config: TestConfig = load_config(&path).unwrap();
        assert_eq!(config.name, "test");
        assert_eq!(config.retries, 3);
    }

    #[test]
    fn load_missing_file() {
        let result: Result<TestConfig, _> = load_config("/nonexistent/config.yaml");
        assert!(matches!(result, Err(NodeError::Config(_))));
    }

    #[test]
    fn parse_invalid_yaml() {
        let result: Result<TestConfig, _> = parse_config("not: [valid: yaml: {{");
        assert!(matches!(result, Err(NodeError::Parse(_))));
    }

    #[test]
    fn memory_store_lookup() {
        let store = MemoryConfigStore::new();
        store.insert("Google_Maps", "GOOGLE_MAPS_API_KEY", "secret123");

        assert_eq!(
            store.get_secret("Google_Maps", "GOOGLE_MAPS_API_KEY").as_deref(),
            Some("secret123")
        );
        assert_eq!(store.get_secret("Google_Maps", "OTHER_KEY"), None);
        assert_eq!(store.get_secret("Other_Service", "GOOGLE_MAPS_API_KEY"), None);
    }

    #[test]
    fn memory_store_empty_value_is_absent() {
        let store = MemoryConfigStore::new();
        store.insert("svc", "VAR", "");
        assert_eq!(store.get_secret("svc", "VAR"), None);
    }

    // Each env test uses its own variable name so tests stay parallel-safe.

    #[test]
    fn env_store_reads_set_variable() {
        std::env::set_var("FLOWGRAPH_TEST_SECRET_SET", "secret123");
        assert_eq!(
            EnvConfigStore
                .get_secret("Any_Service", "FLOWGRAPH_TEST_SECRET_SET")
                .as_deref(),
            Some("secret123")
        );
        std::env::remove_var("FLOWGRAPH_TEST_SECRET_SET");
    }

    #[test]
    fn env_store_unset_variable_is_absent() {
        std::env::remove_var("FLOWGRAPH_TEST_SECRET_UNSET");
        assert_eq!(
            EnvConfigStore.get_secret("Any_Service", "FLOWGRAPH_TEST_SECRET_UNSET"),
            None
        );
    }

    #[test]
    fn env_store_empty_variable_is_absent() {
        std::env::set_var("FLOWGRAPH_TEST_SECRET_EMPTY", "");
        assert_eq!(
            EnvConfigStore.get_secret("Any_Service", "FLOWGRAPH_TEST_SECRET_EMPTY"),
            None
        );
        std::env::remove_var("FLOWGRAPH_TEST_SECRET_EMPTY");
    }
}
