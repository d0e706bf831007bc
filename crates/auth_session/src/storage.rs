//! Persistent store trait and implementations

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::fs;

use crate::error::Result;

/// Durable key-value store the session record lives in.
///
/// The manager uses exactly one fixed key; absence of the record means
/// "no session."
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read a value. `Ok(None)` when the key has never been written or
    /// was deleted.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a value. Deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<()>;
}

#[async_trait]
impl<S: SessionStore + ?Sized> SessionStore for Arc<S> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value).await
    }

    async fn delete(&self, key: &str) -> Result<()> {
        (**self).delete(key).await
    }
}

/// File-backed store: one JSON file per key under a base directory.
#[derive(Clone)]
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }
}

#[async_trait]
impl SessionStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.record_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path).await?;
        Ok(Some(contents))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.base_path).await?;

        let path = self.record_path(key);
        fs::write(&path, value).await?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let path = self.record_path(key);

        if path.exists() {
            fs::remove_file(&path).await?;
        }

        Ok(())
    }
}

/// In-memory store for tests and UI prototyping.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record before the manager starts, simulating a previous run.
    pub fn with_record(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .records
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        store
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        // Yield so overlapping operations actually interleave under test.
        tokio::task::yield_now().await;
        Ok(self.records.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        tokio::task::yield_now().await;
        self.records
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        tokio::task::yield_now().await;
        self.records.lock().unwrap().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_file_store_set_and_get() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.set("user", "{\"id\":\"P1\"}").await.unwrap();

        let value = store.get("user").await.unwrap();
        assert_eq!(value.as_deref(), Some("{\"id\":\"P1\"}"));
    }

    #[tokio::test]
    async fn test_file_store_get_absent() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());

        let value = store.get("user").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_file_store_delete() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.set("user", "{}").await.unwrap();
        store.delete("user").await.unwrap();

        assert!(store.get("user").await.unwrap().is_none());

        // Deleting again is fine.
        store.delete("user").await.unwrap();
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryStore::new();

        store.set("user", "value").await.unwrap();
        assert_eq!(store.get("user").await.unwrap().as_deref(), Some("value"));

        store.delete("user").await.unwrap();
        assert!(store.get("user").await.unwrap().is_none());
    }
}
