//! Anchor-based selection.
//!
//! A selection stores only its anchor. The live endpoint is always the
//! current cursor, and the `(start, end)` ordering is computed on demand.
//!
//! The anchor is not adjusted when edits happen elsewhere in the document.
//! Callers clear or re-begin the selection after unrelated structural edits;
//! a stale anchor past the end of the document is clamped by the buffer
//! when the range is read.

use crate::text::buffer::{Position, TextBuffer};

/// Selection anchored at a fixed position and ending at the cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    active: bool,
    anchor: Position,
}

impl Selection {
    /// Create an inactive selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start selecting from `anchor`.
    pub fn begin(&mut self, anchor: Position) {
        self.active = true;
        self.anchor = anchor;
    }

    /// Follow the cursor.
    ///
    /// The anchor never moves and the live end is read from the cursor, so
    /// there is nothing to store.
    pub fn update(&mut self, _cursor: Position) {}

    /// Stop selecting.
    pub fn clear(&mut self) {
        self.active = false;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn anchor(&self) -> Position {
        self.anchor
    }

    /// Anchor and cursor in reading order.
    #[must_use]
    pub fn normalized(&self, cursor: Position) -> (Position, Position) {
        if self.anchor <= cursor {
            (self.anchor, cursor)
        } else {
            (cursor, self.anchor)
        }
    }

    /// True when inactive or when the anchor sits on the cursor.
    #[must_use]
    pub fn is_empty(&self, cursor: Position) -> bool {
        !self.active || self.anchor == cursor
    }

    /// Normalized range of an active, non-empty selection.
    #[must_use]
    pub fn range(&self, cursor: Position) -> Option<(Position, Position)> {
        (!self.is_empty(cursor)).then(|| self.normalized(cursor))
    }

    /// Like [`range`](Self::range), with both ends clamped into `buffer`.
    ///
    /// A stale anchor can clamp onto the cursor, which reads as empty.
    #[must_use]
    pub fn clamped_range(
        &self,
        buffer: &TextBuffer,
        cursor: Position,
    ) -> Option<(Position, Position)> {
        let (start, end) = self.range(cursor)?;
        let (start, end) = (buffer.clamp(start), buffer.clamp(end));
        (start != end).then_some((start, end))
    }

    /// Selected text, or `None` for an empty selection.
    #[must_use]
    pub fn text(&self, buffer: &TextBuffer, cursor: Position) -> Option<String> {
        let (start, end) = self.clamped_range(buffer, cursor)?;
        Some(buffer.text_in_range(start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_and_clear() {
        let mut sel = Selection::new();
        assert!(!sel.is_active());
        sel.begin(Position::new(1, 2));
        assert!(sel.is_active());
        assert_eq!(sel.anchor(), Position::new(1, 2));
        sel.clear();
        assert!(!sel.is_active());
        assert_eq!(sel.range(Position::new(3, 3)), None);
    }

    #[test]
    fn test_normalized_is_order_independent() {
        let buffer = TextBuffer::with_text("first line\nsecond line\nthird");
        let a = Position::new(2, 5);
        let b = Position::new(1, 0);

        let mut forward = Selection::new();
        forward.begin(b);
        let mut backward = Selection::new();
        backward.begin(a);

        assert_eq!(forward.normalized(a), backward.normalized(b));
        assert_eq!(forward.text(&buffer, a), backward.text(&buffer, b));
        assert_eq!(forward.text(&buffer, a).as_deref(), Some("second line\nthird"));
    }

    #[test]
    fn test_empty_active_selection() {
        let mut sel = Selection::new();
        sel.begin(Position::new(0, 4));
        sel.update(Position::new(0, 4));
        assert!(sel.is_active());
        assert!(sel.is_empty(Position::new(0, 4)));
        assert_eq!(sel.text(&TextBuffer::with_text("abcdef"), Position::new(0, 4)), None);
    }

    #[test]
    fn test_anchor_clamped_onto_cursor_is_empty() {
        let mut buffer = TextBuffer::with_text("abc\ndef");
        let mut sel = Selection::new();
        sel.begin(Position::new(1, 2));
        buffer.delete_range(Position::new(0, 3), Position::new(1, 3));
        let cursor = Position::new(0, 3);
        assert_eq!(sel.clamped_range(&buffer, cursor), None);
        assert_eq!(sel.text(&buffer, cursor), None);
    }

    #[test]
    fn test_stale_anchor_is_clamped_on_read() {
        let mut buffer = TextBuffer::with_text("abc\ndef");
        let mut sel = Selection::new();
        sel.begin(Position::new(1, 3));
        buffer.delete_range(Position::new(0, 1), Position::new(1, 3));
        // Anchor is left as-is.
        assert_eq!(sel.anchor(), Position::new(1, 3));
        assert_eq!(sel.text(&buffer, Position::new(0, 0)).as_deref(), Some("a"));
    }
}
