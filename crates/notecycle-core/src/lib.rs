pub mod config;
pub mod cursor;
pub mod error;
pub mod result;

pub use config::{AppConfig, BackendKind};
pub use cursor::ActiveCursor;
pub use error::NotecycleError;
pub use result::NotecycleResult;
