//! Session identity storage
//!
//! Backends for the small key/value store that keeps the signed-in user
//! across restarts. Supports in-memory (for testing) and file storage.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::{Mutex, RwLock};

use crate::{IdentityError, IdentityResult};

/// Trait for persisted session storage
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the value stored under `key`
    async fn load(&self, key: &str) -> IdentityResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn save(&self, key: &str, value: &str) -> IdentityResult<()>;

    /// Remove `key`; removing an absent key is not an error
    async fn remove(&self, key: &str) -> IdentityResult<()>;
}

/// In-memory session store (for testing)
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, key: &str) -> IdentityResult<Option<String>> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn save(&self, key: &str, value: &str) -> IdentityResult<()> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> IdentityResult<()> {
        self.values.write().await.remove(key);
        Ok(())
    }
}

/// File-backed session store
///
/// Values live in a single JSON object file. A missing file reads as empty;
/// parent directories are created on first write.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    // Serializes read-modify-write cycles on the file.
    write_lock: Mutex<()>,
}

impl FileSessionStore {
    /// Create a store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> IdentityResult<Map<String, Value>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str(&contents)? {
            Value::Object(map) => Ok(map),
            _ => Err(IdentityError::Corrupt(self.path.display().to_string())),
        }
    }

    async fn write_all(&self, values: &Map<String, Value>) -> IdentityResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let contents = serde_json::to_string_pretty(values)?;
        tokio::fs::write(&self.path, contents).await?;
        Ok(())
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self, key: &str) -> IdentityResult<Option<String>> {
        let values = self.read_all().await?;
        Ok(values.get(key).and_then(Value::as_str).map(str::to_string))
    }

    async fn save(&self, key: &str, value: &str) -> IdentityResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut values = self.read_all().await?;
        values.insert(key.to_string(), Value::String(value.to_string()));
        self.write_all(&values).await
    }

    async fn remove(&self, key: &str) -> IdentityResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut values = self.read_all().await?;
        if values.remove(key).is_some() {
            self.write_all(&values).await?;
        }
        Ok(())
    }
}
