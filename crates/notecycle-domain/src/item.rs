use crate::note::Note;
use notecycle_core::{NotecycleError, NotecycleResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ItemId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    /// Newest first.
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Item {
    pub fn new(title: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            notes: Vec::new(),
        }
    }

    pub fn update_title(&mut self, title: String) {
        self.title = title;
    }

    pub fn prepend_note(&mut self, note: Note) -> &Note {
        self.notes.insert(0, note);
        &self.notes[0]
    }

    pub fn remove_note(&mut self, index: usize) -> NotecycleResult<Note> {
        if index >= self.notes.len() {
            return Err(NotecycleError::out_of_range("notes", index, self.notes.len()));
        }
        Ok(self.notes.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_items_get_distinct_ids() {
        let a = Item::new("A".to_string());
        let b = Item::new("A".to_string());
        assert_ne!(a.id, b.id);
        assert!(a.notes.is_empty());
    }

    #[test]
    fn test_prepend_keeps_newest_first() {
        let mut item = Item::new("Groceries".to_string());
        item.prepend_note(Note::new("milk".to_string()));
        item.prepend_note(Note::new("eggs".to_string()));

        let texts: Vec<_> = item.notes.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["eggs", "milk"]);
    }

    #[test]
    fn test_remove_note_out_of_range() {
        let mut item = Item::new("Empty".to_string());
        let err = item.remove_note(0).unwrap_err();
        assert!(err.is_out_of_range());
    }

    #[test]
    fn test_missing_notes_field_defaults_to_empty() {
        let item: Item = serde_json::from_str(r#"{"id": "1", "title": "Bare"}"#).unwrap();
        assert!(item.notes.is_empty());
    }
}
