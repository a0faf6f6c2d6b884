pub mod backend;
pub mod serialization;
pub mod state;
pub mod store;
pub mod traits;

pub use backend::open_adapter;
pub use serialization::*;
pub use state::{LoadOutcome, SaveStats, SaveWorker, StateManager};
pub use store::*;
pub use traits::*;
