use crate::ItemStore;
use notecycle_core::NotecycleResult;

pub mod item_commands;
pub mod note_commands;

pub use item_commands::*;
pub use note_commands::*;

/// Trait for domain commands that mutate state.
/// Each command is one user intent; the caller persists after it succeeds.
pub trait Command: Send + Sync {
    /// Execute this command against the store
    fn execute(&self, store: &mut ItemStore) -> NotecycleResult<()>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}
