use async_trait::async_trait;
use notecycle_core::NotecycleResult;
use notecycle_domain::Snapshot;

/// Storage backend for the full snapshot.
/// Implementations own a single fixed location chosen at construction.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersistenceAdapter: Send + Sync {
    /// Overwrite the stored snapshot
    async fn save(&self, snapshot: &Snapshot) -> NotecycleResult<()>;

    /// Read the stored snapshot
    ///
    /// Returns `Ok(None)` when nothing (or only whitespace) has been stored
    /// and a decode error when the stored text is not a valid snapshot.
    async fn load(&self) -> NotecycleResult<Option<Snapshot>>;

    /// Where the data lives, for log messages
    fn describe(&self) -> String;
}

/// String-to-string storage in the style of platform preference stores
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> NotecycleResult<Option<String>>;

    async fn set(&self, key: &str, value: String) -> NotecycleResult<()>;

    fn describe(&self) -> String;
}

/// Trait for serialization/deserialization strategies
pub trait Serializer<T: Send + Sync>: Send + Sync {
    /// Serialize data to bytes
    fn serialize(&self, data: &T) -> NotecycleResult<Vec<u8>>;

    /// Deserialize data from bytes
    fn deserialize(&self, bytes: &[u8]) -> NotecycleResult<T>;
}
