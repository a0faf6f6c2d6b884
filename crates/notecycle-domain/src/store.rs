use crate::{Item, Note, Snapshot};
use notecycle_core::{ActiveCursor, NotecycleError, NotecycleResult};

const DEFAULT_ITEM_TITLES: [&str; 3] = ["Item 1", "Item 2", "Item 3"];

/// Ordered items plus the pointer to the one currently shown.
///
/// Every mutation leaves the pointer in range for a non-empty list and at `0`
/// for an empty one. The only way to hold an out-of-range pointer is an
/// unclamped [`ItemStore::from_snapshot`]; in that state there is no active
/// item until the next cycle, removal, or import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStore {
    items: Vec<Item>,
    cursor: ActiveCursor,
}

impl ItemStore {
    pub fn new(items: Vec<Item>, active_index: usize) -> Self {
        Self {
            items,
            cursor: ActiveCursor::new(active_index),
        }
    }

    /// Placeholder list used on first run or when saved data is unusable.
    pub fn with_default_items() -> Self {
        let items = DEFAULT_ITEM_TITLES
            .iter()
            .map(|title| Item::new(title.to_string()))
            .collect();
        Self::new(items, 0)
    }

    /// Rebuild a store from decoded data.
    ///
    /// With `clamp` set, an `activeIndex` outside `[0, len)` becomes `0`.
    /// Without it the index is kept as-is, except that a negative index
    /// cannot be represented and is reported as a decode error.
    pub fn from_snapshot(snapshot: Snapshot, clamp: bool) -> NotecycleResult<Self> {
        let Snapshot {
            active_index,
            items,
        } = snapshot;

        let mut cursor = match usize::try_from(active_index) {
            Ok(index) => ActiveCursor::new(index),
            Err(_) if clamp => ActiveCursor::default(),
            Err(_) => {
                return Err(NotecycleError::Decode(format!(
                    "activeIndex must not be negative, got {}",
                    active_index
                )))
            }
        };
        if clamp {
            cursor.clamp(items.len());
        }

        Ok(Self { items, cursor })
    }

    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot::new(self.cursor.get() as i64, self.items.clone())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.cursor.get()
    }

    pub fn active_item(&self) -> Option<&Item> {
        self.items.get(self.cursor.get())
    }

    pub fn cycle_next(&mut self) {
        self.cursor.next(self.items.len());
    }

    pub fn cycle_previous(&mut self) {
        self.cursor.prev(self.items.len());
    }

    pub fn add_item(&mut self, title: String) -> &Item {
        let was_empty = self.items.is_empty();
        self.items.push(Item::new(title));
        self.cursor.after_append(was_empty);
        &self.items[self.items.len() - 1]
    }

    pub fn remove_item(&mut self, index: usize) -> NotecycleResult<Item> {
        self.check_index(index)?;
        let removed = self.items.remove(index);
        self.cursor.after_remove(self.items.len());
        Ok(removed)
    }

    pub fn edit_item(&mut self, index: usize, title: String) -> NotecycleResult<()> {
        self.check_index(index)?;
        self.items[index].update_title(title);
        Ok(())
    }

    /// Move the item at `old_index` to the slot `new_index`.
    ///
    /// `new_index` addresses the list before removal and may equal the length
    /// to mean "after the last item". A target below the source is used as
    /// is; a target above it is shifted down by one to account for the
    /// removal.
    pub fn reorder_item(&mut self, old_index: usize, new_index: usize) -> NotecycleResult<()> {
        let len = self.items.len();
        self.check_index(old_index)?;
        if new_index > len {
            return Err(NotecycleError::out_of_range("reorder target", new_index, len));
        }

        let target = if new_index > old_index {
            new_index - 1
        } else {
            new_index
        };

        let item = self.items.remove(old_index);
        self.items.insert(target, item);
        self.cursor.after_move(old_index, target);
        Ok(())
    }

    /// Prepend a note to the active item. Returns `None` when there is no
    /// active item, in which case nothing changes.
    pub fn add_note_to_active(&mut self, text: String) -> Option<&Note> {
        let index = self.cursor.get();
        let item = self.items.get_mut(index)?;
        Some(item.prepend_note(Note::new(text)))
    }

    pub fn delete_note_from_active(&mut self, note_index: usize) -> NotecycleResult<Note> {
        let index = self.cursor.get();
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or_else(|| NotecycleError::out_of_range("items", index, len))?;
        item.remove_note(note_index)
    }

    /// Replace everything with imported data, clamping the active index.
    pub fn replace_with(&mut self, snapshot: Snapshot) {
        let Snapshot {
            active_index,
            items,
        } = snapshot;
        let mut cursor = ActiveCursor::new(usize::try_from(active_index).unwrap_or(0));
        cursor.clamp(items.len());
        self.items = items;
        self.cursor = cursor;
    }

    fn check_index(&self, index: usize) -> NotecycleResult<()> {
        if index >= self.items.len() {
            return Err(NotecycleError::out_of_range("items", index, self.items.len()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_of(titles: &[&str], active: usize) -> ItemStore {
        let items = titles.iter().map(|t| Item::new(t.to_string())).collect();
        ItemStore::new(items, active)
    }

    fn titles(store: &ItemStore) -> Vec<&str> {
        store.items().iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn test_default_items() {
        let store = ItemStore::with_default_items();
        assert_eq!(titles(&store), vec!["Item 1", "Item 2", "Item 3"]);
        assert_eq!(store.active_index(), 0);
        assert_eq!(store.active_item().unwrap().title, "Item 1");
    }

    #[test]
    fn test_cycle_next_and_previous() {
        let mut store = store_of(&["A", "B", "C"], 0);
        store.cycle_next();
        assert_eq!(store.active_index(), 1);
        store.cycle_previous();
        store.cycle_previous();
        assert_eq!(store.active_index(), 2);
        store.cycle_next();
        assert_eq!(store.active_index(), 0);
    }

    #[test]
    fn test_cycle_on_empty_is_noop() {
        let mut store = ItemStore::default();
        store.cycle_next();
        store.cycle_previous();
        assert_eq!(store.active_index(), 0);
        assert!(store.active_item().is_none());
    }

    #[test]
    fn test_add_item_appends_without_moving_active() {
        let mut store = store_of(&["A", "B"], 1);
        let id = store.add_item("C".to_string()).id.clone();
        assert_eq!(titles(&store), vec!["A", "B", "C"]);
        assert_eq!(store.active_index(), 1);
        assert_eq!(store.items()[2].id, id);
    }

    #[test]
    fn test_add_item_to_empty_activates_it() {
        let mut store = ItemStore::default();
        store.add_item("First".to_string());
        assert_eq!(store.active_index(), 0);
        assert_eq!(store.active_item().unwrap().title, "First");
    }

    #[test]
    fn test_remove_item_keeps_in_range_index() {
        // A, B, C with B active: removing B leaves the pointer on C.
        let mut store = store_of(&["A", "B", "C"], 0);
        store.cycle_next();
        let removed = store.remove_item(1).unwrap();
        assert_eq!(removed.title, "B");
        assert_eq!(titles(&store), vec!["A", "C"]);
        assert_eq!(store.active_index(), 1);
        assert_eq!(store.active_item().unwrap().title, "C");
    }

    #[test]
    fn test_remove_tail_resets_to_zero() {
        let mut store = store_of(&["A", "B", "C"], 2);
        store.remove_item(2).unwrap();
        assert_eq!(store.active_index(), 0);
    }

    #[test]
    fn test_remove_before_active_does_not_follow_item() {
        let mut store = store_of(&["A", "B", "C"], 1);
        store.remove_item(0).unwrap();
        // Still 1, which is now "C" rather than "B".
        assert_eq!(store.active_index(), 1);
        assert_eq!(store.active_item().unwrap().title, "C");
    }

    #[test]
    fn test_remove_last_item_leaves_zero() {
        let mut store = store_of(&["Only"], 0);
        store.remove_item(0).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.active_index(), 0);
    }

    #[test]
    fn test_remove_never_leaves_index_out_of_range() {
        for len in 1..6 {
            for active in 0..len {
                for index in 0..len {
                    let names: Vec<String> = (0..len).map(|i| i.to_string()).collect();
                    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
                    let mut store = store_of(&refs, active);
                    store.remove_item(index).unwrap();
                    if store.is_empty() {
                        assert_eq!(store.active_index(), 0);
                    } else {
                        assert!(store.active_index() < store.len());
                    }
                }
            }
        }
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut store = store_of(&["A"], 0);
        let err = store.remove_item(1).unwrap_err();
        assert!(err.is_out_of_range());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_edit_item() {
        let mut store = store_of(&["A", "B"], 1);
        store.edit_item(0, "Alpha".to_string()).unwrap();
        assert_eq!(titles(&store), vec!["Alpha", "B"]);
        assert_eq!(store.active_index(), 1);
        assert!(store.edit_item(2, "X".to_string()).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_reorder_same_index_is_noop() {
        for i in 0..4 {
            let mut store = store_of(&["A", "B", "C", "D"], 2);
            store.reorder_item(i, i).unwrap();
            assert_eq!(titles(&store), vec!["A", "B", "C", "D"]);
            assert_eq!(store.active_index(), 2);
        }
    }

    #[test]
    fn test_reorder_down_adjusts_for_shift() {
        let mut store = store_of(&["A", "B", "C", "D"], 2);
        store.reorder_item(0, 3).unwrap();
        assert_eq!(titles(&store), vec!["B", "C", "A", "D"]);
        assert_eq!(store.active_index(), 1);
        assert_eq!(store.active_item().unwrap().title, "C");
    }

    #[test]
    fn test_reorder_to_end_slot() {
        let mut store = store_of(&["A", "B", "C", "D"], 2);
        store.reorder_item(0, 4).unwrap();
        assert_eq!(titles(&store), vec!["B", "C", "D", "A"]);
        assert_eq!(store.active_index(), 1);
        assert_eq!(store.active_item().unwrap().title, "C");
    }

    #[test]
    fn test_reorder_up() {
        let mut store = store_of(&["A", "B", "C", "D"], 1);
        store.reorder_item(3, 0).unwrap();
        assert_eq!(titles(&store), vec!["D", "A", "B", "C"]);
        assert_eq!(store.active_index(), 2);
        assert_eq!(store.active_item().unwrap().title, "B");
    }

    #[test]
    fn test_reorder_active_item_follows() {
        let mut store = store_of(&["A", "B", "C", "D"], 3);
        store.reorder_item(3, 1).unwrap();
        assert_eq!(titles(&store), vec!["A", "D", "B", "C"]);
        assert_eq!(store.active_index(), 1);
        assert_eq!(store.active_item().unwrap().title, "D");
    }

    #[test]
    fn test_reorder_keeps_active_identity_for_all_moves() {
        let names = ["A", "B", "C", "D", "E"];
        for active in 0..names.len() {
            for old in 0..names.len() {
                for new in 0..=names.len() {
                    let mut store = store_of(&names, active);
                    let before = store.active_item().unwrap().id.clone();
                    store.reorder_item(old, new).unwrap();
                    assert_eq!(store.active_item().unwrap().id, before);
                }
            }
        }
    }

    #[test]
    fn test_reorder_out_of_range() {
        let mut store = store_of(&["A", "B"], 0);
        assert!(store.reorder_item(2, 0).unwrap_err().is_out_of_range());
        assert!(store.reorder_item(0, 3).unwrap_err().is_out_of_range());
        assert_eq!(titles(&store), vec!["A", "B"]);
    }

    #[test]
    fn test_notes_are_newest_first_and_drain_from_front() {
        let mut store = store_of(&["A", "B"], 1);
        store.add_note_to_active("first".to_string());
        store.add_note_to_active("second".to_string());
        store.add_note_to_active("third".to_string());

        let active = store.active_item().unwrap();
        assert_eq!(active.notes[0].text, "third");
        assert!(store.items()[0].notes.is_empty());

        let drained: Vec<String> = (0..3)
            .map(|_| store.delete_note_from_active(0).unwrap().text)
            .collect();
        assert_eq!(drained, vec!["third", "second", "first"]);
        assert!(store.delete_note_from_active(0).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_add_note_on_empty_is_noop() {
        let mut store = ItemStore::default();
        assert!(store.add_note_to_active("lost".to_string()).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_note_without_active_item() {
        let mut store = ItemStore::default();
        assert!(store.delete_note_from_active(0).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut store = store_of(&["A", "B", "C"], 2);
        store.add_note_to_active("note".to_string());

        let restored = ItemStore::from_snapshot(store.to_snapshot(), false).unwrap();
        assert_eq!(restored, store);
    }

    #[test]
    fn test_from_snapshot_unclamped_keeps_out_of_range_index() {
        let snapshot = Snapshot::new(9, vec![Item::new("A".to_string())]);
        let store = ItemStore::from_snapshot(snapshot, false).unwrap();
        assert_eq!(store.active_index(), 9);
        assert!(store.active_item().is_none());
    }

    #[test]
    fn test_from_snapshot_clamped() {
        let snapshot = Snapshot::new(9, vec![Item::new("A".to_string())]);
        let store = ItemStore::from_snapshot(snapshot, true).unwrap();
        assert_eq!(store.active_index(), 0);

        let snapshot = Snapshot::new(-3, vec![Item::new("A".to_string())]);
        let store = ItemStore::from_snapshot(snapshot, true).unwrap();
        assert_eq!(store.active_index(), 0);
    }

    #[test]
    fn test_from_snapshot_negative_unclamped_is_decode_error() {
        let snapshot = Snapshot::new(-1, vec![]);
        let err = ItemStore::from_snapshot(snapshot, false).unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_replace_with_clamps() {
        let mut store = store_of(&["A"], 0);
        store.replace_with(Snapshot::new(
            5,
            vec![Item::new("X".to_string()), Item::new("Y".to_string())],
        ));
        assert_eq!(titles(&store), vec!["X", "Y"]);
        assert_eq!(store.active_index(), 0);

        store.replace_with(Snapshot::new(1, vec![]));
        assert!(store.is_empty());
        assert_eq!(store.active_index(), 0);
    }
}
