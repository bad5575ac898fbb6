use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

use crate::domain::{common::entities::app_errors::CoreError, storage::ports::KeyValueStore};

/// Process-local store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<RwLock<HashMap<String, serde_json::Value>>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, CoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: serde_json::Value) -> Result<(), CoreError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), CoreError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
