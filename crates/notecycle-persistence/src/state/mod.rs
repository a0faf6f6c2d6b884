pub mod save_worker;

use crate::serialization::JsonSerializer;
use crate::traits::{PersistenceAdapter, Serializer};
use notecycle_core::{NotecycleError, NotecycleResult};
use notecycle_domain::commands::{
    AddItem, AddNote, Command, CyclePrevious, CycleNext, DeleteNote, EditItem, RemoveItem,
    ReorderItem, ReplaceAll,
};
use notecycle_domain::{ItemStore, NoteOperations, Snapshot};
use std::sync::Arc;
use tokio::sync::mpsc;

pub use save_worker::{SaveStats, SaveWorker};

/// What happened when state was read at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Saved state was found and used.
    Loaded,
    /// Nothing was stored; defaults are in use.
    NoData,
    /// Stored state could not be used; defaults are in use.
    Fallback(String),
    /// Built directly without reading anything.
    Fresh,
}

/// Owns the item store and queues a save after every successful command
///
/// # Save Behavior
///
/// The in-memory store is updated synchronously and is the source of truth.
/// After each command a full snapshot is sent to a [`SaveWorker`] over an
/// unbounded channel; the caller never waits for the write. A failed write
/// is logged by the worker and the in-memory change stands.
///
/// To wait for pending writes, call [`StateManager::close_save_channel`] and
/// then await the worker's join handle.
///
/// # Example
/// ```ignore
/// let (mut state, worker) = StateManager::load(adapter, false).await;
/// let handle = worker.spawn();
/// state.add_item("Groceries".to_string())?;
/// state.close_save_channel();
/// handle.await?;
/// ```
pub struct StateManager {
    store: ItemStore,
    save_tx: Option<mpsc::UnboundedSender<Snapshot>>,
    dirty: bool,
    load_outcome: LoadOutcome,
}

impl StateManager {
    /// Wrap a store with no persistence at all
    pub fn in_memory(store: ItemStore) -> Self {
        Self {
            store,
            save_tx: None,
            dirty: false,
            load_outcome: LoadOutcome::Fresh,
        }
    }

    /// Wrap a store and connect it to `adapter` through a save worker
    ///
    /// The worker does nothing until it is spawned or run.
    pub fn new(store: ItemStore, adapter: Arc<dyn PersistenceAdapter>) -> (Self, SaveWorker) {
        let (tx, rx) = mpsc::unbounded_channel();
        let manager = Self {
            store,
            save_tx: Some(tx),
            dirty: false,
            load_outcome: LoadOutcome::Fresh,
        };
        (manager, SaveWorker::new(adapter, rx))
    }

    /// Read saved state from `adapter`, falling back to the placeholder items
    ///
    /// `clamp_on_load` pulls an out-of-range `activeIndex` back to `0`. When
    /// unset the stored index is kept verbatim.
    pub async fn load(
        adapter: Arc<dyn PersistenceAdapter>,
        clamp_on_load: bool,
    ) -> (Self, SaveWorker) {
        let (store, outcome) = match adapter.load().await {
            Ok(Some(snapshot)) => match ItemStore::from_snapshot(snapshot, clamp_on_load) {
                Ok(store) => (store, LoadOutcome::Loaded),
                Err(e) => {
                    tracing::warn!("Unusable state in {}: {}", adapter.describe(), e);
                    (ItemStore::with_default_items(), LoadOutcome::Fallback(e.to_string()))
                }
            },
            Ok(None) => {
                tracing::info!("No saved state in {}, starting fresh", adapter.describe());
                (ItemStore::with_default_items(), LoadOutcome::NoData)
            }
            Err(e) => {
                tracing::warn!("Failed to load state from {}: {}", adapter.describe(), e);
                (ItemStore::with_default_items(), LoadOutcome::Fallback(e.to_string()))
            }
        };

        let (mut manager, worker) = Self::new(store, adapter);
        manager.load_outcome = outcome;
        (manager, worker)
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    /// Execute a command and queue the resulting snapshot for saving
    pub fn execute(&mut self, command: Box<dyn Command>) -> NotecycleResult<Snapshot> {
        let description = command.description();
        tracing::debug!("Executing: {}", description);

        command.execute(&mut self.store)?;
        self.dirty = true;

        let snapshot = self.store.to_snapshot();
        self.queue_snapshot(snapshot.clone());
        Ok(snapshot)
    }

    /// Whether any command has run since construction
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Check if the save channel is available for sending snapshots
    pub fn has_save_channel(&self) -> bool {
        self.save_tx.is_some()
    }

    /// Close the save channel so the worker exits after its queue drains
    pub fn close_save_channel(&mut self) {
        self.save_tx = None;
    }

    fn queue_snapshot(&self, snapshot: Snapshot) {
        if let Some(ref tx) = self.save_tx {
            tracing::debug!("Queueing snapshot for async save");
            match tx.send(snapshot) {
                Ok(_) => {
                    tracing::debug!("Snapshot queued successfully");
                }
                Err(e) => {
                    tracing::error!("Failed to queue save: channel closed: {:?}", e);
                }
            }
        } else {
            tracing::debug!("No save channel available - skipping save");
        }
    }
}

impl NoteOperations for StateManager {
    fn snapshot(&self) -> Snapshot {
        self.store.to_snapshot()
    }

    fn cycle_next(&mut self) -> NotecycleResult<Snapshot> {
        self.execute(Box::new(CycleNext))
    }

    fn cycle_previous(&mut self) -> NotecycleResult<Snapshot> {
        self.execute(Box::new(CyclePrevious))
    }

    fn add_item(&mut self, title: String) -> NotecycleResult<Snapshot> {
        self.execute(Box::new(AddItem { title }))
    }

    fn remove_item(&mut self, index: usize) -> NotecycleResult<Snapshot> {
        self.execute(Box::new(RemoveItem { index }))
    }

    fn edit_item(&mut self, index: usize, title: String) -> NotecycleResult<Snapshot> {
        self.execute(Box::new(EditItem { index, title }))
    }

    fn reorder_item(&mut self, old_index: usize, new_index: usize) -> NotecycleResult<Snapshot> {
        self.execute(Box::new(ReorderItem {
            old_index,
            new_index,
        }))
    }

    fn add_note_to_active(&mut self, text: String) -> NotecycleResult<Snapshot> {
        self.execute(Box::new(AddNote { text }))
    }

    fn delete_note_from_active(&mut self, note_index: usize) -> NotecycleResult<Snapshot> {
        self.execute(Box::new(DeleteNote { index: note_index }))
    }

    fn export_text(&self) -> NotecycleResult<String> {
        let bytes = JsonSerializer.serialize(&self.store.to_snapshot())?;
        String::from_utf8(bytes).map_err(|e| NotecycleError::Internal(e.to_string()))
    }

    fn import_text(&mut self, text: &str) -> NotecycleResult<Snapshot> {
        let snapshot: Snapshot = JsonSerializer.deserialize(text.as_bytes()).map_err(|e| {
            tracing::warn!("Rejected import: {}", e);
            e
        })?;
        tracing::info!("Importing {} items", snapshot.items.len());
        self.execute(Box::new(ReplaceAll { snapshot }))
    }
}
