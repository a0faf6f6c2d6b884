use super::Command;
use crate::ItemStore;
use notecycle_core::NotecycleResult;

/// Prepend a note to the active item; no-op when there is none
pub struct AddNote {
    pub text: String,
}

impl Command for AddNote {
    fn execute(&self, store: &mut ItemStore) -> NotecycleResult<()> {
        store.add_note_to_active(self.text.clone());
        Ok(())
    }

    fn description(&self) -> String {
        "Add note to active item".to_string()
    }
}

pub struct DeleteNote {
    pub index: usize,
}

impl Command for DeleteNote {
    fn execute(&self, store: &mut ItemStore) -> NotecycleResult<()> {
        store.delete_note_from_active(self.index).map(|_| ())
    }

    fn description(&self) -> String {
        format!("Delete note {} from active item", self.index)
    }
}
