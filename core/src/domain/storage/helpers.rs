use serde::{Serialize, de::DeserializeOwned};
use tracing::{error, warn};

use crate::domain::{common::entities::app_errors::CoreError, storage::ports::KeyValueStore};

/// Reads and decodes `key`, falling back to `T::default()` when the entry is
/// missing, unreadable or corrupt.
pub async fn load_or_default<S, T>(store: &S, key: &str) -> T
where
    S: KeyValueStore,
    T: DeserializeOwned + Default + Send,
{
    load_optional(store, key).await.unwrap_or_default()
}

/// Like [`load_or_default`] but keeps "absent" distinguishable from a value.
pub async fn load_optional<S, T>(store: &S, key: &str) -> Option<T>
where
    S: KeyValueStore,
    T: DeserializeOwned + Send,
{
    match store.get(key).await {
        Ok(Some(value)) => match serde_json::from_value(value) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                warn!(key, error = %e, "Stored value is corrupt, ignoring it");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            warn!(key, error = %e, "Failed to read from store, ignoring it");
            None
        }
    }
}

pub async fn persist<S, T>(store: &S, key: &str, value: &T) -> Result<(), CoreError>
where
    S: KeyValueStore,
    T: Serialize + Sync,
{
    let json = serde_json::to_value(value)?;

    store.set(key, json).await.map_err(|e| {
        error!(key, error = %e, "Failed to write to store");
        e
    })
}
