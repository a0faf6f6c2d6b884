use super::Command;
use crate::{ItemStore, Snapshot};
use notecycle_core::NotecycleResult;

/// Advance the active pointer, wrapping at the end
pub struct CycleNext;

impl Command for CycleNext {
    fn execute(&self, store: &mut ItemStore) -> NotecycleResult<()> {
        store.cycle_next();
        Ok(())
    }

    fn description(&self) -> String {
        "Cycle to next item".to_string()
    }
}

/// Move the active pointer back, wrapping at the start
pub struct CyclePrevious;

impl Command for CyclePrevious {
    fn execute(&self, store: &mut ItemStore) -> NotecycleResult<()> {
        store.cycle_previous();
        Ok(())
    }

    fn description(&self) -> String {
        "Cycle to previous item".to_string()
    }
}

pub struct AddItem {
    pub title: String,
}

impl Command for AddItem {
    fn execute(&self, store: &mut ItemStore) -> NotecycleResult<()> {
        store.add_item(self.title.clone());
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add item '{}'", self.title)
    }
}

pub struct RemoveItem {
    pub index: usize,
}

impl Command for RemoveItem {
    fn execute(&self, store: &mut ItemStore) -> NotecycleResult<()> {
        store.remove_item(self.index).map(|_| ())
    }

    fn description(&self) -> String {
        format!("Remove item at {}", self.index)
    }
}

pub struct EditItem {
    pub index: usize,
    pub title: String,
}

impl Command for EditItem {
    fn execute(&self, store: &mut ItemStore) -> NotecycleResult<()> {
        store.edit_item(self.index, self.title.clone())
    }

    fn description(&self) -> String {
        format!("Rename item at {} to '{}'", self.index, self.title)
    }
}

pub struct ReorderItem {
    pub old_index: usize,
    pub new_index: usize,
}

impl Command for ReorderItem {
    fn execute(&self, store: &mut ItemStore) -> NotecycleResult<()> {
        store.reorder_item(self.old_index, self.new_index)
    }

    fn description(&self) -> String {
        format!("Move item from {} to {}", self.old_index, self.new_index)
    }
}

/// Replace the whole store with imported data
pub struct ReplaceAll {
    pub snapshot: Snapshot,
}

impl Command for ReplaceAll {
    fn execute(&self, store: &mut ItemStore) -> NotecycleResult<()> {
        store.replace_with(self.snapshot.clone());
        Ok(())
    }

    fn description(&self) -> String {
        format!("Replace all with {} imported items", self.snapshot.items.len())
    }
}
