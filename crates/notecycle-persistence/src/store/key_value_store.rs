use crate::serialization::JsonSerializer;
use crate::store::atomic_writer::AtomicWriter;
use crate::traits::{KeyValueStore, PersistenceAdapter, Serializer};
use notecycle_core::{NotecycleError, NotecycleResult};
use notecycle_domain::Snapshot;
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// Key under which the snapshot text is stored
pub const DEFAULT_STATE_KEY: &str = "notecycle.state";

/// Snapshot stored as a JSON string under one key of a [`KeyValueStore`]
pub struct KeyValueAdapter<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> KeyValueAdapter<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STATE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[async_trait::async_trait]
impl<S: KeyValueStore> PersistenceAdapter for KeyValueAdapter<S> {
    async fn save(&self, snapshot: &Snapshot) -> NotecycleResult<()> {
        let bytes = JsonSerializer.serialize(snapshot)?;
        let text = String::from_utf8(bytes).map_err(|e| NotecycleError::Internal(e.to_string()))?;
        let len = text.len();

        self.store.set(&self.key, text).await.map_err(|e| match e {
            write @ NotecycleError::PersistenceWrite(_) => write,
            other => NotecycleError::PersistenceWrite(other.to_string()),
        })?;

        tracing::info!(
            "Saved {} bytes under '{}' in {}",
            len,
            self.key,
            self.store.describe()
        );
        Ok(())
    }

    async fn load(&self) -> NotecycleResult<Option<Snapshot>> {
        let Some(text) = self.store.get(&self.key).await? else {
            return Ok(None);
        };
        if text.trim().is_empty() {
            return Ok(None);
        }

        let snapshot: Snapshot = JsonSerializer.deserialize(text.as_bytes())?;
        tracing::info!(
            "Loaded {} items from '{}' in {}",
            snapshot.items.len(),
            self.key,
            self.store.describe()
        );
        Ok(Some(snapshot))
    }

    fn describe(&self) -> String {
        format!("key '{}' in {}", self.key, self.store.describe())
    }
}

/// Process-local key-value store
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> NotecycleResult<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> NotecycleResult<()> {
        self.entries.lock().insert(key.to_string(), value);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

/// Preferences-style store: one JSON object of string values in a single file
///
/// Keys other than the one being written are preserved across writes.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    async fn read_entries(&self) -> NotecycleResult<BTreeMap<String, String>> {
        let Some(bytes) = AtomicWriter::read_optional(&self.path).await? else {
            return Ok(BTreeMap::new());
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(BTreeMap::new());
        }
        JsonSerializer.deserialize(&bytes)
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> NotecycleResult<Option<String>> {
        let mut entries = self.read_entries().await?;
        Ok(entries.remove(key))
    }

    async fn set(&self, key: &str, value: String) -> NotecycleResult<()> {
        let mut entries = match self.read_entries().await {
            Ok(entries) => entries,
            Err(e) if e.is_decode() => {
                tracing::warn!(
                    "Discarding unreadable key-value file {}: {}",
                    self.path.display(),
                    e
                );
                BTreeMap::new()
            }
            Err(e) => return Err(NotecycleError::PersistenceWrite(e.to_string())),
        };
        entries.insert(key.to_string(), value);

        let bytes = JsonSerializer.serialize(&entries)?;
        AtomicWriter::write_atomic(&self.path, &bytes)
            .await
            .map_err(|e| {
                NotecycleError::PersistenceWrite(format!("{}: {}", self.path.display(), e))
            })
    }

    fn describe(&self) -> String {
        format!("key-value file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notecycle_domain::{Item, Note};
    use tempfile::tempdir;

    fn sample() -> Snapshot {
        let mut item = Item::new("Ideas".to_string());
        item.prepend_note(Note::new("a kv-backed note".to_string()));
        Snapshot::new(0, vec![item])
    }

    #[tokio::test]
    async fn test_memory_roundtrip() {
        let adapter = KeyValueAdapter::new(MemoryKeyValueStore::new());
        assert!(adapter.load().await.unwrap().is_none());

        adapter.save(&sample()).await.unwrap();
        let stored = adapter.store().get(DEFAULT_STATE_KEY).await.unwrap().unwrap();
        assert!(stored.contains("a kv-backed note"));

        let snapshot = sample();
        adapter.save(&snapshot).await.unwrap();
        assert_eq!(adapter.load().await.unwrap(), Some(snapshot));
    }

    #[tokio::test]
    async fn test_blank_value_is_no_data() {
        let store = MemoryKeyValueStore::new();
        store.set(DEFAULT_STATE_KEY, "  ".to_string()).await.unwrap();
        let adapter = KeyValueAdapter::new(store);
        assert!(adapter.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_garbage_value_is_decode_error() {
        let store = MemoryKeyValueStore::new();
        store.set(DEFAULT_STATE_KEY, "[]".to_string()).await.unwrap();
        let adapter = KeyValueAdapter::new(store);
        assert!(adapter.load().await.unwrap_err().is_decode());
    }

    #[tokio::test]
    async fn test_file_store_keeps_other_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let store = FileKeyValueStore::new(&path);
        store.set("theme", "dark".to_string()).await.unwrap();

        let adapter = KeyValueAdapter::new(store);
        let snapshot = sample();
        adapter.save(&snapshot).await.unwrap();

        assert_eq!(
            adapter.store().get("theme").await.unwrap().as_deref(),
            Some("dark")
        );
        assert_eq!(adapter.load().await.unwrap(), Some(snapshot));
    }

    #[tokio::test]
    async fn test_file_store_replaces_corrupt_file_on_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{{{").unwrap();

        let store = FileKeyValueStore::new(&path);
        assert!(store.get("anything").await.unwrap_err().is_decode());

        store.set("anything", "value".to_string()).await.unwrap();
        assert_eq!(
            store.get("anything").await.unwrap().as_deref(),
            Some("value")
        );
    }

    #[tokio::test]
    async fn test_custom_key() {
        let adapter = KeyValueAdapter::with_key(MemoryKeyValueStore::new(), "custom");
        adapter.save(&sample()).await.unwrap();
        assert!(adapter.store().get("custom").await.unwrap().is_some());
        assert!(adapter.store().get(DEFAULT_STATE_KEY).await.unwrap().is_none());
        assert!(adapter.describe().contains("custom"));
    }
}
