//! Wrap-around active pointer for circular lists.
//!
//! Holds the index of the current element and knows how that index must move
//! when the underlying list is cycled, grown, shrunk, or reordered. The list
//! itself lives elsewhere; every method takes the relevant length.

/// Index of the active element in a circular list.
///
/// An empty list has no active element; the cursor then reads as `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveCursor {
    index: usize,
}

impl ActiveCursor {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    pub fn get(&self) -> usize {
        self.index
    }

    /// Advance by one, wrapping to the front.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index % len + 1) % len;
    }

    /// Step back by one, wrapping to the back.
    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index % len + len - 1) % len;
    }

    /// An element was appended; `was_empty` is the list state before the push.
    pub fn after_append(&mut self, was_empty: bool) {
        if was_empty {
            self.index = 0;
        }
    }

    /// An element was removed and the list now has `len` elements.
    ///
    /// Falls back to the first element whenever the cursor no longer fits,
    /// regardless of which element was removed.
    pub fn after_remove(&mut self, len: usize) {
        if self.index >= len {
            self.index = 0;
        }
    }

    /// An element moved from `old` to `new`, where `new` is the final
    /// position after the remove-then-insert shift has been applied.
    pub fn after_move(&mut self, old: usize, new: usize) {
        if self.index == old {
            self.index = new;
        } else if old < self.index && self.index <= new {
            self.index -= 1;
        } else if new <= self.index && self.index < old {
            self.index += 1;
        }
    }

    /// Reset to the first element if out of range for `len`.
    pub fn clamp(&mut self, len: usize) {
        if self.index >= len {
            self.index = 0;
        }
    }
}
