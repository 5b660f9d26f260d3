//! Literal search over the document.
//!
//! Matches are found per line with byte-level substring search and stored
//! as codepoint positions in reading order. Matching resumes after the end
//! of each hit, so `"foo"` in `"foofoo"` yields two matches, not three.
//!
//! The result list is rebuilt wholesale whenever the query or the buffer
//! changes; it is never patched in place.

use crate::text::buffer::{Position, TextBuffer, col_of_byte_offset, end_of_text};

/// Query, replacement and the current ordered match list.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    query: String,
    replacement: String,
    results: Vec<Position>,
    current: Option<usize>,
}

impl SearchState {
    /// Create an empty search state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the query. Call [`search`](Self::search) to refresh results.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_replacement(&mut self, replacement: impl Into<String>) {
        self.replacement = replacement.into();
    }

    #[must_use]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Rebuild the match list from `buffer`.
    ///
    /// An empty query produces no matches.
    pub fn search(&mut self, buffer: &TextBuffer) {
        self.results.clear();
        self.current = None;
        if self.query.is_empty() {
            return;
        }
        for (row, line) in buffer.lines().enumerate() {
            // match_indices resumes after each hit, so matches never overlap.
            for (byte, _) in line.match_indices(self.query.as_str()) {
                self.results
                    .push(Position::new(row, col_of_byte_offset(line, byte)));
            }
        }
    }

    /// Matches in reading order.
    #[must_use]
    pub fn results(&self) -> &[Position] {
        &self.results
    }

    #[must_use]
    pub fn match_count(&self) -> usize {
        self.results.len()
    }

    /// Index of the match last navigated to.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// First match strictly after `cursor`, wrapping to the first match.
    pub fn next(&mut self, cursor: Position) -> Option<Position> {
        if self.results.is_empty() {
            return None;
        }
        let idx = self.results.partition_point(|&pos| pos <= cursor);
        let idx = if idx == self.results.len() { 0 } else { idx };
        self.current = Some(idx);
        Some(self.results[idx])
    }

    /// Last match strictly before `cursor`, wrapping to the last match.
    pub fn prev(&mut self, cursor: Position) -> Option<Position> {
        if self.results.is_empty() {
            return None;
        }
        let before = self.results.partition_point(|&pos| pos < cursor);
        let idx = before.checked_sub(1).unwrap_or(self.results.len() - 1);
        self.current = Some(idx);
        Some(self.results[idx])
    }

    /// First match at or after `cursor`, wrapping to the first match.
    ///
    /// Used when a new query is entered so the cursor stays on a hit it is
    /// already parked on.
    pub fn nearest(&mut self, cursor: Position) -> Option<Position> {
        if self.results.is_empty() {
            return None;
        }
        let idx = self.results.partition_point(|&pos| pos < cursor);
        let idx = if idx == self.results.len() { 0 } else { idx };
        self.current = Some(idx);
        Some(self.results[idx])
    }

    /// Range of the match starting exactly at `cursor`.
    #[must_use]
    pub fn match_at(&self, cursor: Position) -> Option<(Position, Position)> {
        self.results
            .binary_search(&cursor)
            .ok()
            .map(|_| (cursor, end_of_text(cursor, &self.query)))
    }

    /// Drop the query and all results. The replacement is kept.
    pub fn clear(&mut self) {
        self.query.clear();
        self.results.clear();
        self.current = None;
    }
}
