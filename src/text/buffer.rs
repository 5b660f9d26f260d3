//! Line-oriented text storage.
//!
//! [`TextBuffer`] keeps the document as an ordered vector of owned lines.
//! Each line is a `String` without its terminating `\n`, so UTF-8 validity
//! is guaranteed by construction and every removal drops the line it owns.
//!
//! Public coordinates are [`Position`]s counted in codepoints. Byte offsets
//! only appear inside this module and in the two column mapping helpers
//! [`byte_offset_of_col`] and [`col_of_byte_offset`].
//!
//! Structural operations never fail: rows and columns outside the document
//! are clamped to the nearest valid position.

use crate::error::Result;
use std::cmp::Ordering;
use std::fmt;

/// A codepoint-indexed location in the document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Line number (0-indexed).
    pub row: usize,
    /// Codepoint column (0-indexed).
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

/// Byte offset of codepoint column `col` in `line`.
///
/// Columns past the end clamp to the line length in bytes.
#[must_use]
pub fn byte_offset_of_col(line: &str, col: usize) -> usize {
    line.char_indices().nth(col).map_or(line.len(), |(idx, _)| idx)
}

/// Codepoint column of byte `offset` in `line`.
///
/// Offsets past the end clamp to the line length; an offset inside a
/// multi-byte codepoint resolves to that codepoint's column.
#[must_use]
pub fn col_of_byte_offset(line: &str, offset: usize) -> usize {
    let offset = offset.min(line.len());
    line.char_indices()
        .take_while(|&(idx, ch)| idx + ch.len_utf8() <= offset)
        .count()
}

/// Position just past `text` if it were inserted at `start`.
///
/// Newlines in `text` advance the row; the column counts codepoints after
/// the last newline.
#[must_use]
pub fn end_of_text(start: Position, text: &str) -> Position {
    match text.rfind('\n') {
        None => Position::new(start.row, start.col + text.chars().count()),
        Some(last) => {
            let rows = text.bytes().filter(|&b| b == b'\n').count();
            Position::new(start.row + rows, text[last + 1..].chars().count())
        }
    }
}

/// Ordered, non-empty sequence of lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
    revision: u64,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer {
    /// Create a buffer holding one empty line.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            revision: 0,
        }
    }

    /// Create a buffer from text, splitting on `\n` and tolerating `\r\n`.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self {
            lines: split_lines(text),
            revision: 0,
        }
    }

    /// Create a buffer from raw file bytes.
    ///
    /// Rejects invalid UTF-8 without producing a partial buffer. A trailing
    /// newline yields an extra empty last line.
    ///
    /// ```
    /// use textcore::TextBuffer;
    ///
    /// let buffer = TextBuffer::load(b"a\r\nb\n").unwrap();
    /// assert_eq!(buffer.lines().collect::<Vec<_>>(), vec!["a", "b", ""]);
    /// assert!(TextBuffer::load(&[0x61, 0xff]).is_err());
    /// ```
    pub fn load(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes).map_err(|e| crate::Error::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        })?;
        Ok(Self::with_text(text))
    }

    /// Join lines with `\n`. No trailing newline is added.
    #[must_use]
    pub fn serialize(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    /// Number of lines. Always at least one.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Line content without its terminator.
    #[must_use]
    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    /// Iterate over all lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(String::as_str)
    }

    /// Lines in `rows`, clipped to the document.
    #[must_use]
    pub fn line_slice(&self, rows: std::ops::Range<usize>) -> &[String] {
        let end = rows.end.min(self.lines.len());
        let start = rows.start.min(end);
        &self.lines[start..end]
    }

    /// Length of a line in codepoints. Missing rows have length 0.
    #[must_use]
    pub fn line_len(&self, row: usize) -> usize {
        self.line(row).map_or(0, |line| line.chars().count())
    }

    /// Total size in bytes as serialized.
    #[must_use]
    pub fn len_bytes(&self) -> usize {
        self.lines.iter().map(String::len).sum::<usize>() + self.lines.len() - 1
    }

    /// Total size in codepoints as serialized.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.lines.iter().map(|l| l.chars().count()).sum::<usize>() + self.lines.len() - 1
    }

    /// Check if the document is a single empty line.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Counter bumped by every mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Position after the last codepoint of the last line.
    #[must_use]
    pub fn end_position(&self) -> Position {
        let row = self.lines.len() - 1;
        Position::new(row, self.line_len(row))
    }

    /// Clamp a position into the document.
    #[must_use]
    pub fn clamp(&self, pos: Position) -> Position {
        let row = pos.row.min(self.lines.len() - 1);
        Position::new(row, pos.col.min(self.line_len(row)))
    }

    /// Byte offset of `col` within `row`.
    #[must_use]
    pub fn byte_offset(&self, row: usize, col: usize) -> usize {
        self.line(row).map_or(0, |line| byte_offset_of_col(line, col))
    }

    /// Insert `text` at `pos`, splitting lines on `\n`.
    ///
    /// Returns the position just after the inserted text.
    pub fn insert(&mut self, pos: Position, text: &str) -> Position {
        let pos = self.clamp(pos);
        if text.is_empty() {
            return pos;
        }
        let at = byte_offset_of_col(&self.lines[pos.row], pos.col);

        let mut segments = text.split('\n');
        let first = segments.next().unwrap_or_default();
        let rest: Vec<&str> = segments.collect();

        if rest.is_empty() {
            self.lines[pos.row].insert_str(at, first);
        } else {
            let tail = self.lines[pos.row].split_off(at);
            self.lines[pos.row].push_str(first);
            let mut new_lines: Vec<String> = rest.iter().map(|s| (*s).to_string()).collect();
            if let Some(last) = new_lines.last_mut() {
                last.push_str(&tail);
            }
            let insert_at = pos.row + 1;
            self.lines.splice(insert_at..insert_at, new_lines);
        }

        self.bump_revision();
        end_of_text(pos, text)
    }

    /// Remove the text between two positions.
    ///
    /// Arguments are clamped and ordered first, so passing them reversed is
    /// equivalent to passing them in reading order.
    pub fn delete_range(&mut self, start: Position, end: Position) {
        let (start, end) = self.ordered(start, end);
        if start == end {
            return;
        }

        if start.row == end.row {
            let line = &mut self.lines[start.row];
            let from = byte_offset_of_col(line, start.col);
            let to = byte_offset_of_col(line, end.col);
            line.replace_range(from..to, "");
        } else {
            let suffix = {
                let end_line = &self.lines[end.row];
                end_line[byte_offset_of_col(end_line, end.col)..].to_string()
            };
            let head = &mut self.lines[start.row];
            let cut = byte_offset_of_col(head, start.col);
            head.truncate(cut);
            head.push_str(&suffix);
            // Highest index first so earlier indices stay valid.
            for row in (start.row + 1..=end.row).rev() {
                self.lines.remove(row);
            }
        }

        self.bump_revision();
    }

    /// Text between two positions, lines joined with `\n`.
    #[must_use]
    pub fn text_in_range(&self, start: Position, end: Position) -> String {
        let (start, end) = self.ordered(start, end);
        if start == end {
            return String::new();
        }

        let first = &self.lines[start.row];
        let from = byte_offset_of_col(first, start.col);
        if start.row == end.row {
            let to = byte_offset_of_col(first, end.col);
            return first[from..to].to_string();
        }

        let mut out = String::from(&first[from..]);
        for line in &self.lines[start.row + 1..end.row] {
            out.push('\n');
            out.push_str(line);
        }
        let last = &self.lines[end.row];
        out.push('\n');
        out.push_str(&last[..byte_offset_of_col(last, end.col)]);
        out
    }

    /// Position one codepoint before `pos`, crossing line starts.
    #[must_use]
    pub fn prev_position(&self, pos: Position) -> Option<Position> {
        let pos = self.clamp(pos);
        if pos.col > 0 {
            Some(Position::new(pos.row, pos.col - 1))
        } else if pos.row > 0 {
            Some(Position::new(pos.row - 1, self.line_len(pos.row - 1)))
        } else {
            None
        }
    }

    /// Position one codepoint after `pos`, crossing line ends.
    #[must_use]
    pub fn next_position(&self, pos: Position) -> Option<Position> {
        let pos = self.clamp(pos);
        if pos.col < self.line_len(pos.row) {
            Some(Position::new(pos.row, pos.col + 1))
        } else if pos.row + 1 < self.lines.len() {
            Some(Position::new(pos.row + 1, 0))
        } else {
            None
        }
    }

    /// Replace all content, resetting to the lines of `text`.
    pub fn set_text(&mut self, text: &str) {
        self.lines = split_lines(text);
        self.bump_revision();
    }

    /// Reset to a single empty line.
    pub fn clear(&mut self) {
        self.lines = vec![String::new()];
        self.bump_revision();
    }

    fn ordered(&self, a: Position, b: Position) -> (Position, Position) {
        let a = self.clamp(a);
        let b = self.clamp(b);
        if a <= b { (a, b) } else { (b, a) }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}
