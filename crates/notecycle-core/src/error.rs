use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotecycleError {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Index {index} out of range for {target} (length {len})")]
    OutOfRange {
        target: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Persistence write error: {0}")]
    PersistenceWrite(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl NotecycleError {
    pub fn out_of_range(target: &'static str, index: usize, len: usize) -> Self {
        Self::OutOfRange { target, index, len }
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}
