use crate::store::{FileKeyValueStore, JsonFileAdapter, KeyValueAdapter};
use crate::traits::PersistenceAdapter;
use notecycle_core::{AppConfig, BackendKind};
use std::sync::Arc;

/// Build the adapter for this process. Called once at startup.
pub fn open_adapter(config: &AppConfig) -> Arc<dyn PersistenceAdapter> {
    let adapter: Arc<dyn PersistenceAdapter> = match config.effective_backend() {
        BackendKind::File => Arc::new(JsonFileAdapter::new(config.effective_data_file())),
        BackendKind::KeyValue => Arc::new(KeyValueAdapter::new(FileKeyValueStore::new(
            config.effective_key_value_file(),
        ))),
    };
    tracing::debug!("Using {} backend: {}", config.effective_backend(), adapter.describe());
    adapter
}
