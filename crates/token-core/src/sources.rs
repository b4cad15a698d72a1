//! Collaborator seams for remote fetch and snapshot persistence
//!
//! The pipeline itself performs no network or filesystem work; it talks to
//! these traits. Hosts plug in their own transport (the remote repository
//! fetch, auth, retries) behind [`RemoteTokenSource`]; the in-memory and
//! filesystem stores shipped here cover tests and the common embedding
//! case.

use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{Error, Result};

/// Where remote token documents come from
#[async_trait]
pub trait RemoteTokenSource: Send + Sync {
    /// Fetch the current remote token document
    async fn fetch(&self) -> Result<Value>;
}

/// Persistence for the last-synchronized snapshot
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Load the snapshot, or `None` when none has been written yet
    async fn load(&self) -> Result<Option<Value>>;

    /// Replace the snapshot
    async fn store(&self, document: &Value) -> Result<()>;
}

// Shared stores are common: the host keeps a handle to inspect the
// snapshot while the manager owns its boxed copy.
#[async_trait]
impl<S: SnapshotStore + ?Sized> SnapshotStore for std::sync::Arc<S> {
    async fn load(&self) -> Result<Option<Value>> {
        (**self).load().await
    }

    async fn store(&self, document: &Value) -> Result<()> {
        (**self).store(document).await
    }
}

/// A fixed in-memory remote document
pub struct MemoryRemoteSource {
    document: Value,
}

impl MemoryRemoteSource {
    pub fn new(document: Value) -> Self {
        Self { document }
    }
}

#[async_trait]
impl RemoteTokenSource for MemoryRemoteSource {
    async fn fetch(&self) -> Result<Value> {
        Ok(self.document.clone())
    }
}

/// An in-memory snapshot store
#[derive(Default)]
pub struct MemorySnapshotStore {
    snapshot: Mutex<Option<Value>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding a snapshot
    pub fn seeded(document: Value) -> Self {
        Self {
            snapshot: Mutex::new(Some(document)),
        }
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
    async fn load(&self) -> Result<Option<Value>> {
        let guard = self
            .snapshot
            .lock()
            .map_err(|_| Error::snapshot_store("snapshot lock poisoned"))?;
        Ok(guard.clone())
    }

    async fn store(&self, document: &Value) -> Result<()> {
        let mut guard = self
            .snapshot
            .lock()
            .map_err(|_| Error::snapshot_store("snapshot lock poisoned"))?;
        *guard = Some(document.clone());
        Ok(())
    }
}

/// Snapshot store backed by a JSON file on disk.
///
/// A missing file loads as `None`; writing creates the parent directory if
/// needed.
pub struct FsSnapshotStore {
    path: PathBuf,
}

impl FsSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl SnapshotStore for FsSnapshotStore {
    async fn load(&self) -> Result<Option<Value>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn store(&self, document: &Value) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(document)?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemorySnapshotStore::new();
        assert!(store.load().await.unwrap().is_none());

        let doc = json!({"color": {"$type": "color", "$value": "#111"}});
        store.store(&doc).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(doc));
    }

    #[tokio::test]
    async fn test_seeded_store_loads_snapshot() {
        let doc = json!({"a": {"$type": "color", "$value": "#1"}});
        let store = MemorySnapshotStore::seeded(doc.clone());
        assert_eq!(store.load().await.unwrap(), Some(doc));
    }

    #[tokio::test]
    async fn test_memory_remote_fetches_document() {
        let doc = json!({"b": {"$type": "color", "$value": "#2"}});
        let remote = MemoryRemoteSource::new(doc.clone());
        assert_eq!(remote.fetch().await.unwrap(), doc);
    }

    #[tokio::test]
    async fn test_fs_store_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsSnapshotStore::new(dir.path().join("tokens.json"));
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_fs_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsSnapshotStore::new(dir.path().join("nested").join("tokens.json"));

        let doc = json!({"color": {"$type": "color", "$value": "#111"}});
        store.store(&doc).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(doc));
    }
}
