#![forbid(unsafe_code)]

//! Key-value state persistence.
//!
//! The hub persists exactly one entry (the `"theme"` flag), but storage is
//! kept behind a small backend trait so tests can run against memory.
//!
//! Invariants:
//! 1. Storage failures never panic; operations return `Result`.
//! 2. File writes use the write-then-rename pattern.
//! 3. A missing or corrupt file loads as an empty map (defaults apply).

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::RwLock;

/// Errors from state storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// I/O error during file operations.
    Io(io::Error),
    /// Serialization or deserialization error.
    Serialization(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Serialization(msg) => write!(f, "serialization error: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Serialization(_) => None,
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for pluggable state storage backends.
pub trait StorageBackend: Send {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Load all stored entries. Empty map if nothing exists yet.
    fn load_all(&self) -> StorageResult<HashMap<String, String>>;

    /// Save all entries atomically, replacing existing state.
    fn save_all(&self, entries: &HashMap<String, String>) -> StorageResult<()>;
}

/// In-memory storage backend for testing and ephemeral state.
#[derive(Default)]
pub struct MemoryStorage {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create memory storage pre-populated with entries.
    #[must_use]
    pub fn with_entries(entries: HashMap<String, String>) -> Self {
        Self {
            data: RwLock::new(entries),
        }
    }
}

impl StorageBackend for MemoryStorage {
    fn name(&self) -> &str {
        "MemoryStorage"
    }

    fn load_all(&self) -> StorageResult<HashMap<String, String>> {
        self.data
            .read()
            .map(|g| g.clone())
            .map_err(|_| StorageError::Serialization("lock poisoned".into()))
    }

    fn save_all(&self, entries: &HashMap<String, String>) -> StorageResult<()> {
        let mut guard = self
            .data
            .write()
            .map_err(|_| StorageError::Serialization("lock poisoned".into()))?;
        *guard = entries.clone();
        Ok(())
    }
}

/// JSON-file storage backend.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at `path`.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl StorageBackend for FileStorage {
    fn name(&self) -> &str {
        "FileStorage"
    }

    fn load_all(&self) -> StorageResult<HashMap<String, String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&raw) {
            Ok(map) => Ok(map),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e,
                    "state file corrupt, falling back to defaults");
                Ok(HashMap::new())
            }
        }
    }

    fn save_all(&self, entries: &HashMap<String, String>) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Cached key-value store over a [`StorageBackend`].
///
/// Loads once at construction; `set` writes through to the backend.
pub struct StateStore {
    backend: Box<dyn StorageBackend>,
    cache: HashMap<String, String>,
}

impl StateStore {
    /// Load a store from the given backend.
    ///
    /// A failing load degrades to an empty cache; the failure is logged.
    pub fn load(backend: Box<dyn StorageBackend>) -> Self {
        let cache = match backend.load_all() {
            Ok(cache) => cache,
            Err(e) => {
                tracing::warn!(backend = backend.name(), error = %e, "state load failed");
                HashMap::new()
            }
        };
        Self { backend, cache }
    }

    /// Read a value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.cache.get(key).map(String::as_str)
    }

    /// Write a value through to the backend.
    pub fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.cache.insert(key.to_string(), value.to_string());
        self.backend.save_all(&self.cache)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_round_trip() {
        let mut store = StateStore::load(Box::new(MemoryStorage::new()));
        assert_eq!(store.get("theme"), None);
        store.set("theme", "dark").expect("set");
        assert_eq!(store.get("theme"), Some("dark"));
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("state.json");

        let mut store = StateStore::load(Box::new(FileStorage::new(path.clone())));
        store.set("theme", "dark").expect("set");
        drop(store);

        let store = StateStore::load(Box::new(FileStorage::new(path)));
        assert_eq!(store.get("theme"), Some("dark"));
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::new(dir.path().join("nope.json"));
        assert!(storage.load_all().expect("load").is_empty());
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("state.json");
        fs::write(&path, "{not json").expect("write");
        let storage = FileStorage::new(path);
        assert!(storage.load_all().expect("load").is_empty());
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/deeper/state.json");
        let storage = FileStorage::new(path.clone());
        let mut entries = HashMap::new();
        entries.insert("theme".into(), "light".into());
        storage.save_all(&entries).expect("save");
        assert!(path.exists());
        // The temporary file was renamed away.
        assert!(!path.with_extension("json.tmp").exists());
    }
}
