//! Named configuration lookup for gateway calls.

use std::collections::HashMap;

use crate::Error;

/// Configuration name used when the caller does not specify one.
pub const DEFAULT_CONFIG_NAME: &str = "default";

/// A named bundle of endpoint URL, API key, and model identifier used to
/// parameterize a single call.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Secret API key, sent as the `key` query parameter.
    pub api_key: String,
    /// Model identifier, surfaced in diagnostics.
    pub model_name: String,
    /// Endpoint URL the request is posted to.
    pub api_url: String,
}

/// A repository of named gateway configurations.
///
/// Lookup is exact-match on name. Absence must be signaled with
/// [`Error::ConfigNotFound`], distinct from other store failures
/// ([`Error::Store`]). The gateway re-resolves on every call and never
/// mutates the store.
#[async_trait::async_trait]
pub trait ConfigStore: Send + Sync + 'static {
    /// Return the configuration registered under `name`.
    async fn resolve(&self, name: &str) -> Result<GatewayConfig, Error>;
}

/// An in-memory [`ConfigStore`] for tests and embedded use.
#[derive(Debug, Default)]
pub struct InMemoryConfigStore {
    entries: HashMap<String, GatewayConfig>,
}

impl InMemoryConfigStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a configuration under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, config: GatewayConfig) {
        self.entries.insert(name.into(), config);
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with_config(mut self, name: impl Into<String>, config: GatewayConfig) -> Self {
        self.insert(name, config);
        self
    }
}

#[async_trait::async_trait]
impl ConfigStore for InMemoryConfigStore {
    async fn resolve(&self, name: &str) -> Result<GatewayConfig, Error> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| Error::config_not_found(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> GatewayConfig {
        GatewayConfig {
            api_key: "test-key".to_string(),
            model_name: "gemini-pro".to_string(),
            api_url: "https://example.com/v1beta/models/gemini-pro:generateContent".to_string(),
        }
    }

    #[tokio::test]
    async fn test_resolve_returns_registered_config() {
        let store = InMemoryConfigStore::new().with_config("default", sample_config());

        let config = store.resolve("default").await.unwrap();
        assert_eq!(config.model_name, "gemini-pro");
        assert_eq!(config.api_key, "test-key");
    }

    #[tokio::test]
    async fn test_resolve_missing_name_is_config_not_found() {
        let store = InMemoryConfigStore::new();

        let err = store.resolve("missing").await.unwrap_err();
        match err {
            Error::ConfigNotFound(name) => assert_eq!(name, "missing"),
            other => panic!("expected ConfigNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_resolve_is_exact_match() {
        let store = InMemoryConfigStore::new().with_config("prod-gemini", sample_config());

        assert!(store.resolve("prod").await.is_err());
        assert!(store.resolve("prod-gemini-2").await.is_err());
        assert!(store.resolve("prod-gemini").await.is_ok());
    }

    #[tokio::test]
    async fn test_insert_replaces_existing_entry() {
        let mut store = InMemoryConfigStore::new();
        store.insert("default", sample_config());

        let mut updated = sample_config();
        updated.model_name = "gemini-flash".to_string();
        store.insert("default", updated);

        let config = store.resolve("default").await.unwrap();
        assert_eq!(config.model_name, "gemini-flash");
    }
}
