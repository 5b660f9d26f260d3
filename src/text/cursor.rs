//! Cursor position and movement rules.
//!
//! Horizontal moves, pointer placement and explicit placement update the
//! preferred column. Vertical moves never do, so moving through a short
//! line and back onto a long one recovers the original column.

use crate::layout::LayoutMetrics;
use crate::text::buffer::{Position, TextBuffer};
use crate::unicode::{next_word_boundary, prev_word_boundary};

/// Cursor with a sticky preferred column for vertical movement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Line number (0-indexed).
    pub row: usize,
    /// Codepoint column (0-indexed).
    pub col: usize,
    /// Column to snap back to on the next vertical move.
    pub preferred_col: usize,
}

/// Row transition produced by a cursor movement.
///
/// The session uses it to run the leave-row hook on the row the cursor
/// just left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorMove {
    pub from_row: usize,
    pub to_row: usize,
}

impl CursorMove {
    /// Row that was left, if the movement changed rows.
    #[must_use]
    pub fn left_row(&self) -> Option<usize> {
        (self.from_row != self.to_row).then_some(self.from_row)
    }
}

/// Horizontal direction for word movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

impl Cursor {
    /// Create a cursor at `(row, col)` with a matching preferred column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            preferred_col: col,
        }
    }

    /// Cursor location without the preferred column.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Place the cursor at `pos`, clamped into the buffer.
    ///
    /// Behaves like a horizontal move for the preferred column.
    pub fn set_position(&mut self, buffer: &TextBuffer, pos: Position) -> CursorMove {
        let from_row = self.row;
        let pos = buffer.clamp(pos);
        self.row = pos.row;
        self.col = pos.col;
        self.preferred_col = pos.col;
        self.moved_from(from_row)
    }

    /// Move by `delta_col` codepoints within the line.
    ///
    /// Going below column 0 lands at the end of the previous row, and going
    /// past the line end lands at column 0 of the next row. At the first or
    /// last row the column clamps instead.
    pub fn move_horizontal(&mut self, buffer: &TextBuffer, delta_col: isize) -> CursorMove {
        let from_row = self.row;
        let pos = buffer.clamp(self.position());
        let len = buffer.line_len(pos.row);
        let last = buffer.line_count() - 1;
        let target = if delta_col < 0 {
            match pos.col.checked_sub(delta_col.unsigned_abs()) {
                Some(col) => Position::new(pos.row, col),
                None if pos.row > 0 => Position::new(pos.row - 1, buffer.line_len(pos.row - 1)),
                None => Position::new(pos.row, 0),
            }
        } else {
            let col = pos.col.saturating_add(delta_col.unsigned_abs());
            if col <= len {
                Position::new(pos.row, col)
            } else if pos.row < last {
                Position::new(pos.row + 1, 0)
            } else {
                Position::new(pos.row, len)
            }
        };
        self.row = target.row;
        self.col = target.col;
        self.preferred_col = target.col;
        self.moved_from(from_row)
    }

    /// Move by `delta_row` lines, snapping to the preferred column.
    pub fn move_vertical(&mut self, buffer: &TextBuffer, delta_row: isize) -> CursorMove {
        let from_row = self.row;
        let last = buffer.line_count() - 1;
        let row = if delta_row < 0 {
            self.row.saturating_sub(delta_row.unsigned_abs())
        } else {
            self.row.saturating_add(delta_row.unsigned_abs())
        };
        self.row = row.min(last);
        self.col = self.preferred_col.min(buffer.line_len(self.row));
        self.moved_from(from_row)
    }

    /// Place the cursor under a pointer at document pixel coordinates.
    pub fn place(
        &mut self,
        buffer: &TextBuffer,
        metrics: &LayoutMetrics,
        x: u32,
        y: u32,
    ) -> CursorMove {
        let row = metrics.row_at(y).min(buffer.line_count() - 1);
        let col = buffer
            .line(row)
            .map_or(0, |line| metrics.column_at(line, x));
        self.set_position(buffer, Position::new(row, col))
    }

    /// Move to column 0 of the current line.
    pub fn move_to_line_start(&mut self, buffer: &TextBuffer) -> CursorMove {
        self.set_position(buffer, Position::new(self.row, 0))
    }

    /// Move past the last codepoint of the current line.
    pub fn move_to_line_end(&mut self, buffer: &TextBuffer) -> CursorMove {
        let len = buffer.line_len(self.row);
        self.set_position(buffer, Position::new(self.row, len))
    }

    /// Move to the start of the document.
    pub fn move_to_document_start(&mut self, buffer: &TextBuffer) -> CursorMove {
        self.set_position(buffer, Position::default())
    }

    /// Move to the end of the document.
    pub fn move_to_document_end(&mut self, buffer: &TextBuffer) -> CursorMove {
        self.set_position(buffer, buffer.end_position())
    }

    /// Jump to the start of `row`, clamped to the last line.
    pub fn goto_line(&mut self, buffer: &TextBuffer, row: usize) -> CursorMove {
        self.set_position(buffer, Position::new(row, 0))
    }

    /// Move to the next or previous word boundary.
    ///
    /// At a line edge the move crosses to the neighbouring line first, like
    /// a one-codepoint horizontal move.
    pub fn move_word(&mut self, buffer: &TextBuffer, direction: Direction) -> CursorMove {
        let pos = buffer.clamp(self.position());
        let line = buffer.line(pos.row).unwrap_or_default();
        let target = match direction {
            Direction::Forward if pos.col >= buffer.line_len(pos.row) => {
                buffer.next_position(pos).unwrap_or(pos)
            }
            Direction::Forward => Position::new(pos.row, next_word_boundary(line, pos.col)),
            Direction::Backward if pos.col == 0 => buffer.prev_position(pos).unwrap_or(pos),
            Direction::Backward => Position::new(pos.row, prev_word_boundary(line, pos.col)),
        };
        self.set_position(buffer, target)
    }

    /// Re-snap into the buffer after a structural edit.
    ///
    /// The preferred column is kept.
    pub fn clamp(&mut self, buffer: &TextBuffer) {
        let pos = buffer.clamp(self.position());
        self.row = pos.row;
        self.col = pos.col;
    }

    fn moved_from(&self, from_row: usize) -> CursorMove {
        CursorMove {
            from_row,
            to_row: self.row,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(text: &str) -> TextBuffer {
        TextBuffer::with_text(text)
    }

    #[test]
    fn test_horizontal_within_line() {
        let buf = buffer("hello");
        let mut cursor = Cursor::new(0, 1);
        cursor.move_horizontal(&buf, 2);
        assert_eq!(cursor, Cursor::new(0, 3));
        cursor.move_horizontal(&buf, -3);
        assert_eq!(cursor, Cursor::new(0, 0));
    }

    #[test]
    fn test_horizontal_wraps_rows() {
        let buf = buffer("ab\ncd");
        let mut cursor = Cursor::new(1, 0);
        let moved = cursor.move_horizontal(&buf, -1);
        assert_eq!(cursor, Cursor::new(0, 2));
        assert_eq!(moved.left_row(), Some(1));

        let moved = cursor.move_horizontal(&buf, 1);
        assert_eq!(cursor, Cursor::new(1, 0));
        assert_eq!(moved.left_row(), Some(0));
    }

    #[test]
    fn test_horizontal_overshoot_lands_on_row_edge() {
        let buf = buffer("ab\ncd");
        let mut cursor = Cursor::new(1, 1);
        cursor.move_horizontal(&buf, -3);
        assert_eq!(cursor, Cursor::new(0, 2));

        let mut cursor = Cursor::new(0, 1);
        cursor.move_horizontal(&buf, 100);
        assert_eq!(cursor, Cursor::new(1, 0));
    }

    #[test]
    fn test_horizontal_clamps_at_document_edges() {
        let buf = buffer("ab\ncd");
        let mut cursor = Cursor::new(0, 0);
        cursor.move_horizontal(&buf, -5);
        assert_eq!(cursor, Cursor::new(0, 0));

        let mut cursor = Cursor::new(1, 1);
        cursor.move_horizontal(&buf, 10);
        assert_eq!(cursor, Cursor::new(1, 2));
    }

    #[test]
    fn test_vertical_recovers_preferred_column() {
        let buf = buffer("0123456789\nabc\n0123456789");
        let mut cursor = Cursor::new(0, 8);
        cursor.move_vertical(&buf, 1);
        assert_eq!((cursor.row, cursor.col), (1, 3));
        assert_eq!(cursor.preferred_col, 8);
        cursor.move_vertical(&buf, 1);
        assert_eq!((cursor.row, cursor.col), (2, 8));
    }

    #[test]
    fn test_vertical_clamps_rows() {
        let buf = buffer("a\nb");
        let mut cursor = Cursor::new(1, 1);
        let moved = cursor.move_vertical(&buf, 5);
        assert_eq!(cursor.row, 1);
        assert_eq!(moved.left_row(), None);
        cursor.move_vertical(&buf, -9);
        assert_eq!(cursor.row, 0);
    }

    #[test]
    fn test_horizontal_resets_preferred_column() {
        let buf = buffer("0123456789\nabc\n0123456789");
        let mut cursor = Cursor::new(0, 8);
        cursor.move_vertical(&buf, 1);
        cursor.move_horizontal(&buf, -1);
        assert_eq!(cursor.preferred_col, 2);
        cursor.move_vertical(&buf, 1);
        assert_eq!((cursor.row, cursor.col), (2, 2));
    }

    #[test]
    fn test_place_with_tabs() {
        let buf = buffer("x\n\tab");
        let metrics = LayoutMetrics::new(4, 10).with_line_height(20);
        let mut cursor = Cursor::default();
        // Row 1, just right of the tab's midpoint.
        cursor.place(&buf, &metrics, 21, 25);
        assert_eq!(cursor, Cursor::new(1, 1));
        // Far below and to the right clamps to the last line end.
        cursor.place(&buf, &metrics, 1000, 1000);
        assert_eq!(cursor, Cursor::new(1, 3));
    }

    #[test]
    fn test_line_and_document_bounds() {
        let buf = buffer("one\ntwo words");
        let mut cursor = Cursor::new(1, 4);
        cursor.move_to_line_end(&buf);
        assert_eq!(cursor.col, 9);
        cursor.move_to_line_start(&buf);
        assert_eq!(cursor.col, 0);
        cursor.move_to_document_start(&buf);
        assert_eq!(cursor.position(), Position::new(0, 0));
        cursor.move_to_document_end(&buf);
        assert_eq!(cursor.position(), Position::new(1, 9));
        cursor.goto_line(&buf, 40);
        assert_eq!(cursor.position(), Position::new(1, 0));
    }

    #[test]
    fn test_move_word() {
        let buf = buffer("hello world\nnext");
        let mut cursor = Cursor::new(0, 0);
        cursor.move_word(&buf, Direction::Forward);
        assert_eq!(cursor.col, 5);
        cursor.move_word(&buf, Direction::Forward);
        assert_eq!(cursor.col, 11);
        cursor.move_word(&buf, Direction::Forward);
        assert_eq!(cursor.position(), Position::new(1, 0));
        cursor.move_word(&buf, Direction::Backward);
        assert_eq!(cursor.position(), Position::new(0, 11));
        cursor.move_word(&buf, Direction::Backward);
        assert_eq!(cursor.position(), Position::new(0, 6));
    }

    #[test]
    fn test_clamp_keeps_preferred_column() {
        let mut buf = buffer("abcdef\nxy");
        let mut cursor = Cursor::new(1, 2);
        cursor.preferred_col = 5;
        buf.delete_range(Position::new(0, 0), Position::new(1, 2));
        cursor.clamp(&buf);
        assert_eq!((cursor.row, cursor.col, cursor.preferred_col), (0, 0, 5));
    }
}
