use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Fixed storage keys for the persisted state slices.
///
/// Each slice is written independently under its own key whenever the
/// corresponding collection changes, and restored independently at startup.
pub mod keys {
    pub const USER: &str = "microlearnai_user";
    pub const TOPICS: &str = "microlearnai_topics";
    pub const LESSONS: &str = "microlearnai_lessons";
    pub const QUIZ_RESULTS: &str = "microlearnai_quizResults";
}

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Contract for a string-valued key-value store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the removal fails.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Typed JSON layer over a [`KeyValueStore`].
///
/// `load` treats a value that fails to decode as absent: the corrupted value
/// is logged and removed so a later write starts clean, and the caller falls
/// back to its default. Corruption in one key never affects another.
#[derive(Clone)]
pub struct StateStore {
    inner: Arc<dyn KeyValueStore>,
}

impl StateStore {
    #[must_use]
    pub fn new(inner: Arc<dyn KeyValueStore>) -> Self {
        Self { inner }
    }

    /// Load and decode the value under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent or its value is malformed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only for backend failures, never for decode
    /// failures.
    pub async fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.inner.get(key).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                tracing::warn!(key, %err, "discarding malformed persisted value");
                self.inner.remove(key).await?;
                Ok(None)
            }
        }
    }

    /// Encode `value` as JSON and store it under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if encoding fails, or a backend
    /// error if the write fails.
    pub async fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.inner.put(key, &raw).await?;
        tracing::debug!(key, "persisted state slice");
        Ok(())
    }

    /// Remove the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the removal fails.
    pub async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key).await
    }
}

/// Simple in-memory store for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.values
            .lock()
            .map_err(|_| StorageError::Connection("poisoned lock".into()))
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    fn state_store() -> (StateStore, InMemoryStore) {
        let kv = InMemoryStore::new();
        (StateStore::new(Arc::new(kv.clone())), kv)
    }

    #[tokio::test]
    async fn save_then_load_roundtrips() {
        let (store, _) = state_store();
        let sample = Sample {
            name: "arrays".into(),
            count: 3,
        };
        store.save("k", &sample).await.unwrap();
        let back: Option<Sample> = store.load("k").await.unwrap();
        assert_eq!(back, Some(sample));
    }

    #[tokio::test]
    async fn absent_key_loads_as_none() {
        let (store, _) = state_store();
        let back: Option<Sample> = store.load("missing").await.unwrap();
        assert_eq!(back, None);
    }

    #[tokio::test]
    async fn malformed_value_is_discarded_not_fatal() {
        let (store, kv) = state_store();
        kv.put("k", "{not json").await.unwrap();

        let back: Option<Sample> = store.load("k").await.unwrap();
        assert_eq!(back, None);
        // The corrupted value is dropped so the next read starts clean.
        assert_eq!(kv.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn remove_clears_the_key() {
        let (store, kv) = state_store();
        store.save("k", &1_u32).await.unwrap();
        store.remove("k").await.unwrap();
        assert_eq!(kv.get("k").await.unwrap(), None);
    }

    #[test]
    fn store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StateStore>();
        assert_send_sync::<InMemoryStore>();
    }
}
