//! Point-in-time capture of the whole item list.
//!
//! `Snapshot` is the one external format: it is what gets written to the
//! backing medium and what export/import exchange as text. The shape is
//! `{"activeIndex": int, "items": [...]}` with no version field, so any
//! change to it breaks previously saved data.

use crate::Item;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Serializable state of an [`ItemStore`](crate::ItemStore).
///
/// `active_index` is kept signed so that hand-edited or foreign payloads
/// with negative values still decode and can be clamped by the importer.
/// Integers beyond the `i64` range saturate instead of failing to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(
        rename = "activeIndex",
        default,
        deserialize_with = "deserialize_saturating_index"
    )]
    pub active_index: i64,
    pub items: Vec<Item>,
}

impl Snapshot {
    pub fn new(active_index: i64, items: Vec<Item>) -> Self {
        Self {
            active_index,
            items,
        }
    }

    /// Index into `items` if it is in range.
    pub fn active_position(&self) -> Option<usize> {
        usize::try_from(self.active_index)
            .ok()
            .filter(|&index| index < self.items.len())
    }

    pub fn active_item(&self) -> Option<&Item> {
        self.active_position().map(|index| &self.items[index])
    }
}

fn deserialize_saturating_index<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(index) = number.as_i64() {
        return Ok(index);
    }
    if number.as_u64().is_some() {
        return Ok(i64::MAX);
    }
    // Integers wider than u64 arrive as floats
    match number.as_f64() {
        Some(value) if value.is_finite() && value.fract() == 0.0 => Ok(value as i64),
        _ => Err(de::Error::custom(format!(
            "activeIndex must be an integer, got {}",
            number
        ))),
    }
}
