use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::{debug, error};

use crate::domain::{common::entities::app_errors::CoreError, storage::ports::KeyValueStore};

/// One JSON document per key under a data directory.
///
/// Writes go to a temporary file first and are renamed into place, so a crash
/// mid-write leaves the previous value readable.
#[derive(Debug, Clone)]
pub struct JsonFileKeyValueStore {
    root: PathBuf,
}

impl JsonFileKeyValueStore {
    pub async fn new(root: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await.map_err(|e| {
            error!(path = %root.display(), error = %e, "Failed to create data directory");
            CoreError::Persistence(format!("cannot create {}: {e}", root.display()))
        })?;

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", file_stem(key)))
    }
}

/// Keys such as `daily-intake:2025-01-06` become `daily-intake_2025-01-06`.
fn file_stem(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

impl KeyValueStore for JsonFileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, CoreError> {
        let path = self.path_for(key);

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(CoreError::Persistence(format!(
                    "cannot read {}: {e}",
                    path.display()
                )));
            }
        };

        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    async fn set(&self, key: &str, value: serde_json::Value) -> Result<(), CoreError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(&value)?;

        tokio::fs::write(&tmp, bytes)
            .await
            .map_err(|e| CoreError::Persistence(format!("cannot write {}: {e}", tmp.display())))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| CoreError::Persistence(format!("cannot write {}: {e}", path.display())))?;

        debug!(key, path = %path.display(), "Stored value");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), CoreError> {
        let path = self.path_for(key);

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CoreError::Persistence(format!(
                "cannot remove {}: {e}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn values_survive_a_new_handle() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileKeyValueStore::new(dir.path()).await.unwrap();

        store
            .set("daily-intake:2025-01-06", json!({"meals": []}))
            .await
            .unwrap();

        let reopened = JsonFileKeyValueStore::new(dir.path()).await.unwrap();
        assert_eq!(
            reopened.get("daily-intake:2025-01-06").await.unwrap(),
            Some(json!({"meals": []}))
        );
        assert!(dir.path().join("daily-intake_2025-01-06.json").exists());
    }

    #[tokio::test]
    async fn missing_keys_read_as_none_and_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileKeyValueStore::new(dir.path().join("nested")).await.unwrap();

        assert_eq!(store.get("health-profile").await.unwrap(), None);
        store.remove("health-profile").await.unwrap();

        store.set("health-profile", json!(1)).await.unwrap();
        store.remove("health-profile").await.unwrap();
        assert_eq!(store.get("health-profile").await.unwrap(), None);
    }

    #[tokio::test]
    async fn corrupt_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileKeyValueStore::new(dir.path()).await.unwrap();
        std::fs::write(dir.path().join("rewards-data.json"), b"{ not json").unwrap();

        let err = store.get("rewards-data").await.unwrap_err();

        assert!(matches!(err, CoreError::Serialization(_)));
    }

    #[test]
    fn keys_map_to_safe_file_names() {
        assert_eq!(file_stem("daily-intake:index"), "daily-intake_index");
        assert_eq!(file_stem("../etc/passwd"), "___etc_passwd");
    }
}
