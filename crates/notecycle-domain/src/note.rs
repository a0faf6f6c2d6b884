use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single free-text entry attached to an item.
///
/// Notes are never edited in place; they are only created or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Note {
    pub fn new(text: String) -> Self {
        Self::with_timestamp(text, Utc::now())
    }

    pub fn with_timestamp(text: String, timestamp: DateTime<Utc>) -> Self {
        Self { text, timestamp }
    }
}
