pub mod commands;
pub mod item;
pub mod note;
pub mod operations;
pub mod snapshot;
pub mod store;

pub use item::{Item, ItemId};
pub use note::Note;
pub use operations::NoteOperations;
pub use snapshot::Snapshot;
pub use store::ItemStore;
