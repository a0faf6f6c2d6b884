pub mod atomic_writer;
pub mod json_file_store;
pub mod key_value_store;

pub use atomic_writer::AtomicWriter;
pub use json_file_store::JsonFileAdapter;
pub use key_value_store::{
    FileKeyValueStore, KeyValueAdapter, MemoryKeyValueStore, DEFAULT_STATE_KEY,
};
