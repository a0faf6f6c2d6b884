use crate::Snapshot;
use notecycle_core::NotecycleResult;

/// The command surface a front end drives.
///
/// Every mutating call returns the snapshot the front end should render next.
pub trait NoteOperations {
    fn snapshot(&self) -> Snapshot;

    fn cycle_next(&mut self) -> NotecycleResult<Snapshot>;
    fn cycle_previous(&mut self) -> NotecycleResult<Snapshot>;

    fn add_item(&mut self, title: String) -> NotecycleResult<Snapshot>;
    fn remove_item(&mut self, index: usize) -> NotecycleResult<Snapshot>;
    fn edit_item(&mut self, index: usize, title: String) -> NotecycleResult<Snapshot>;
    fn reorder_item(&mut self, old_index: usize, new_index: usize) -> NotecycleResult<Snapshot>;

    fn add_note_to_active(&mut self, text: String) -> NotecycleResult<Snapshot>;
    fn delete_note_from_active(&mut self, note_index: usize) -> NotecycleResult<Snapshot>;

    fn export_text(&self) -> NotecycleResult<String>;
    fn import_text(&mut self, text: &str) -> NotecycleResult<Snapshot>;
}
