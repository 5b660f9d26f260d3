//! Editing session: the single owner of document state.
//!
//! [`Editor`] owns one buffer, cursor, selection, history and search state
//! and is the only code path that mutates the buffer. Every mutation goes
//! through [`Editor::insert_at`] or [`Editor::delete_range_at`], which
//! record history (unless replaying), refresh search results and re-clamp
//! the cursor.
//!
//! # Examples
//!
//! ```
//! use textcore::{Editor, Position};
//!
//! let mut editor = Editor::with_text("hello\nworld");
//! editor.set_cursor(Position::new(0, 5));
//! editor.insert("\n");
//! assert_eq!(editor.text(), "hello\n\nworld");
//! assert_eq!(editor.cursor().position(), Position::new(1, 0));
//!
//! editor.undo();
//! assert_eq!(editor.text(), "hello\nworld");
//! assert_eq!(editor.cursor().position(), Position::new(0, 5));
//! ```

use crate::command::Command;
use crate::config::EditorOptions;
use crate::error::Result;
use crate::event::{LogLevel, emit_event, emit_log};
use crate::io::{Clipboard, Storage};
use crate::layout::LayoutMetrics;
use crate::text::buffer::{Position, TextBuffer, end_of_text};
use crate::text::cursor::{Cursor, CursorMove, Direction};
use crate::text::history::{ActionKind, EditMode, History};
use crate::text::search::SearchState;
use crate::text::selection::Selection;
use std::path::{Path, PathBuf};

/// A document with its cursor, selection, undo history and search state.
#[derive(Clone, Debug)]
pub struct Editor {
    buffer: TextBuffer,
    cursor: Cursor,
    selection: Selection,
    history: History,
    search: SearchState,
    options: EditorOptions,
    metrics: LayoutMetrics,
    /// Movement extends the selection instead of clearing it.
    extending: bool,
    /// Buffer revision at the last load or save.
    saved_revision: u64,
    path: Option<PathBuf>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::with_options(EditorOptions::default())
    }
}

impl Editor {
    /// Create an empty session with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session with the given options.
    #[must_use]
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            buffer: TextBuffer::new(),
            cursor: Cursor::default(),
            selection: Selection::new(),
            history: History::with_max_depth(options.max_history_depth),
            search: SearchState::new(),
            metrics: options.metrics(),
            options,
            extending: false,
            saved_revision: 0,
            path: None,
        }
    }

    /// Create a session holding `text`. The document starts unmodified.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        let mut editor = Self::new();
        editor.buffer = TextBuffer::with_text(text);
        editor.saved_revision = editor.buffer.revision();
        editor
    }

    /// Replace the options.
    ///
    /// Rebuilds layout metrics and applies the new history depth, pruning
    /// old actions if it shrank.
    pub fn set_options(&mut self, options: EditorOptions) {
        self.options = options;
        self.metrics = options.metrics();
        self.history.set_max_depth(options.max_history_depth);
    }

    #[must_use]
    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// Replace the layout metrics, e.g. with a custom width function.
    pub fn set_metrics(&mut self, metrics: LayoutMetrics) {
        self.metrics = metrics;
    }

    #[must_use]
    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    #[must_use]
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// Normalized range of a non-empty selection, clamped into the buffer.
    #[must_use]
    pub fn selection_range(&self) -> Option<(Position, Position)> {
        self.selection.clamped_range(&self.buffer, self.cursor.position())
    }

    /// Text of a non-empty selection.
    #[must_use]
    pub fn selected_text(&self) -> Option<String> {
        self.selection.text(&self.buffer, self.cursor.position())
    }

    /// Whole document joined with `\n`.
    #[must_use]
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Path of the last successful load or save.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Check whether the buffer changed since the last load or save.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.buffer.revision() != self.saved_revision
    }

    /// Check whether movement currently extends the selection.
    #[must_use]
    pub fn is_extending(&self) -> bool {
        self.extending
    }

    // ----- Mutation funnel -----

    /// Insert `text` at `pos` and return the position after it.
    ///
    /// In [`EditMode::Record`] the insertion becomes one undo action and the
    /// redo stack is dropped.
    pub fn insert_at(&mut self, pos: Position, text: &str, mode: EditMode) -> Position {
        let pos = self.buffer.clamp(pos);
        if text.is_empty() {
            return pos;
        }
        let end = self.buffer.insert(pos, text);
        self.history.record(mode, ActionKind::Insert, pos, text);
        self.after_edit();
        end
    }

    /// Delete the text between two positions and return the range start.
    ///
    /// Positions are clamped and ordered. An empty range is a no-op and
    /// records nothing.
    pub fn delete_range_at(&mut self, start: Position, end: Position, mode: EditMode) -> Position {
        let (start, end) = {
            let a = self.buffer.clamp(start);
            let b = self.buffer.clamp(end);
            if a <= b { (a, b) } else { (b, a) }
        };
        if start == end {
            return start;
        }
        let removed = self.buffer.text_in_range(start, end);
        self.buffer.delete_range(start, end);
        self.history.record(mode, ActionKind::Delete, start, &removed);
        self.after_edit();
        start
    }

    fn after_edit(&mut self) {
        self.cursor.clamp(&self.buffer);
        if !self.search.query().is_empty() {
            self.search.search(&self.buffer);
        }
    }

    // ----- Editing -----

    /// Insert at the cursor, replacing a non-empty selection.
    ///
    /// `\r\n` line endings are normalized to `\n`. The cursor ends up after
    /// the inserted text. Replacing a selection records two undo actions:
    /// the deletion and the insertion.
    pub fn insert(&mut self, text: &str) {
        let text = text.replace("\r\n", "\n");
        self.delete_selection();
        let end = self.insert_at(self.cursor.position(), &text, EditMode::Record);
        self.cursor.set_position(&self.buffer, end);
    }

    /// Delete the selection, or the codepoint before the cursor.
    ///
    /// At column 0 this joins the line with the one above. At the start of
    /// the document it does nothing.
    pub fn delete_backward(&mut self) {
        if self.delete_selection() {
            return;
        }
        let cursor = self.cursor.position();
        if let Some(prev) = self.buffer.prev_position(cursor) {
            let start = self.delete_range_at(prev, cursor, EditMode::Record);
            self.cursor.set_position(&self.buffer, start);
        }
    }

    /// Delete the selection, or the codepoint after the cursor.
    pub fn delete_forward(&mut self) {
        if self.delete_selection() {
            return;
        }
        let cursor = self.cursor.position();
        if let Some(next) = self.buffer.next_position(cursor) {
            let start = self.delete_range_at(cursor, next, EditMode::Record);
            self.cursor.set_position(&self.buffer, start);
        }
    }

    /// Delete a non-empty selection and clear it.
    ///
    /// Returns `false` when there was nothing selected.
    pub fn delete_selection(&mut self) -> bool {
        let range = self.selection_range();
        self.selection.clear();
        let Some((start, end)) = range else {
            return false;
        };
        let start = self.delete_range_at(start, end, EditMode::Record);
        self.cursor.set_position(&self.buffer, start);
        true
    }

    /// Undo the newest action. Returns `false` when there was nothing to undo.
    ///
    /// The cursor is left at the start of the undone action.
    pub fn undo(&mut self) -> bool {
        let Some(action) = self.history.pop_undo() else {
            return false;
        };
        match action.kind {
            ActionKind::Insert => {
                self.delete_range_at(action.start, action.end(), EditMode::Replay);
            }
            ActionKind::Delete => {
                self.insert_at(action.start, &action.text, EditMode::Replay);
            }
        }
        self.selection.clear();
        self.cursor.set_position(&self.buffer, action.start);
        emit_log(
            LogLevel::Debug,
            &format!("undo {:?} at {}", action.kind, action.start),
        );
        self.history.push_redo(action);
        true
    }

    /// Redo the newest undone action. Returns `false` when there was nothing
    /// to redo.
    ///
    /// A redone insertion leaves the cursor after the text; a redone
    /// deletion leaves it at the deletion point.
    pub fn redo(&mut self) -> bool {
        let Some(action) = self.history.pop_redo() else {
            return false;
        };
        let cursor = match action.kind {
            ActionKind::Insert => self.insert_at(action.start, &action.text, EditMode::Replay),
            ActionKind::Delete => {
                self.delete_range_at(action.start, action.end(), EditMode::Replay)
            }
        };
        self.selection.clear();
        self.cursor.set_position(&self.buffer, cursor);
        emit_log(
            LogLevel::Debug,
            &format!("redo {:?} at {}", action.kind, action.start),
        );
        self.history.push_undo(action);
        true
    }

    // ----- Cursor and selection -----

    /// Place the cursor at `pos` without touching the selection.
    pub fn set_cursor(&mut self, pos: Position) {
        self.cursor.set_position(&self.buffer, pos);
    }

    /// Start or stop extending the selection with movement.
    ///
    /// Starting anchors a new selection at the cursor unless one is already
    /// active. Stopping keeps the current selection.
    pub fn extend_selection(&mut self, extend: bool) {
        self.extending = extend;
        if extend && !self.selection.is_active() {
            self.selection.begin(self.cursor.position());
        }
    }

    /// Move by rows or codepoint columns. Rows win when both are non-zero.
    pub fn move_cursor(&mut self, drow: isize, dcol: isize) {
        self.before_move();
        let moved = if drow != 0 {
            self.cursor.move_vertical(&self.buffer, drow)
        } else {
            self.cursor.move_horizontal(&self.buffer, dcol)
        };
        self.after_move(moved);
    }

    /// Place the cursor under a pointer at document pixel coordinates.
    pub fn place_cursor(&mut self, x: u32, y: u32) {
        self.before_move();
        let moved = self.cursor.place(&self.buffer, &self.metrics, x, y);
        self.after_move(moved);
    }

    /// Jump to the start of a 1-based line. Line 0 is treated as line 1.
    pub fn goto_line(&mut self, line: usize) {
        self.before_move();
        let moved = self.cursor.goto_line(&self.buffer, line.saturating_sub(1));
        self.after_move(moved);
    }

    pub fn move_word(&mut self, direction: Direction) {
        self.before_move();
        let moved = self.cursor.move_word(&self.buffer, direction);
        self.after_move(moved);
    }

    pub fn move_to_line_start(&mut self) {
        self.before_move();
        let moved = self.cursor.move_to_line_start(&self.buffer);
        self.after_move(moved);
    }

    pub fn move_to_line_end(&mut self) {
        self.before_move();
        let moved = self.cursor.move_to_line_end(&self.buffer);
        self.after_move(moved);
    }

    /// Select the whole document, leaving the cursor at its end.
    pub fn select_all(&mut self) {
        self.selection.begin(Position::default());
        let moved = self.cursor.move_to_document_end(&self.buffer);
        if let Some(row) = moved.left_row() {
            self.leave_row(row);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn before_move(&mut self) {
        if !self.extending {
            self.selection.clear();
        } else if !self.selection.is_active() {
            self.selection.begin(self.cursor.position());
        }
    }

    fn after_move(&mut self, moved: CursorMove) {
        self.selection.update(self.cursor.position());
        if let Some(row) = moved.left_row() {
            self.leave_row(row);
        }
    }

    /// Hook run when the cursor moves off `row`.
    ///
    /// With `trim_blank_lines_on_leave`, a row holding only whitespace is
    /// emptied as a recorded deletion. The row itself stays, so the cursor
    /// row is unaffected.
    fn leave_row(&mut self, row: usize) {
        if !self.options.trim_blank_lines_on_leave {
            return;
        }
        let Some(line) = self.buffer.line(row) else {
            return;
        };
        if line.is_empty() || !line.chars().all(char::is_whitespace) {
            return;
        }
        let len = self.buffer.line_len(row);
        self.delete_range_at(Position::new(row, 0), Position::new(row, len), EditMode::Record);
    }

    // ----- Search -----

    /// Set the query, search, and move to the nearest match at or after the
    /// cursor. Returns the number of matches.
    pub fn find(&mut self, query: &str) -> usize {
        self.search.set_query(query);
        self.search.search(&self.buffer);
        if let Some(pos) = self.search.nearest(self.cursor.position()) {
            self.selection.clear();
            let moved = self.cursor.set_position(&self.buffer, pos);
            self.leave_row_for_match(moved);
        }
        let count = self.search.match_count();
        emit_event("search_updated", &format!("{{\"matches\":{count}}}"));
        count
    }

    /// Set the text used by [`replace_current`](Self::replace_current) and
    /// [`replace_all`](Self::replace_all).
    pub fn set_replacement(&mut self, replacement: &str) {
        self.search.set_replacement(replacement);
    }

    /// Move to the next match, wrapping. Returns `false` with no matches.
    pub fn next_match(&mut self) -> bool {
        self.jump_to(|search, cursor| search.next(cursor))
    }

    /// Move to the previous match, wrapping. Returns `false` with no matches.
    pub fn prev_match(&mut self) -> bool {
        self.jump_to(|search, cursor| search.prev(cursor))
    }

    fn jump_to(
        &mut self,
        pick: impl FnOnce(&mut SearchState, Position) -> Option<Position>,
    ) -> bool {
        match pick(&mut self.search, self.cursor.position()) {
            Some(pos) => {
                self.selection.clear();
                let moved = self.cursor.set_position(&self.buffer, pos);
                self.leave_row_for_match(moved);
                true
            }
            None => false,
        }
    }

    /// Run the leave-row hook after jumping to a match.
    ///
    /// A trim rebuilds the results, so the current index is re-pointed at
    /// the match under the cursor.
    fn leave_row_for_match(&mut self, moved: CursorMove) {
        let Some(row) = moved.left_row() else {
            return;
        };
        let revision = self.buffer.revision();
        self.leave_row(row);
        if self.buffer.revision() != revision {
            self.search.nearest(self.cursor.position());
        }
    }

    /// Replace the match under the cursor, then advance to the next match.
    ///
    /// When the cursor is not on a match it only advances. Returns `true`
    /// when a replacement happened.
    pub fn replace_current(&mut self) -> bool {
        let replaced = match self.search.match_at(self.cursor.position()) {
            Some((start, end)) => {
                let replacement = self.search.replacement().to_string();
                let after = self.replace_range(start, end, &replacement);
                self.cursor.set_position(&self.buffer, after);
                emit_log(LogLevel::Debug, &format!("replaced match at {start}"));
                true
            }
            None => false,
        };
        self.next_match();
        replaced
    }

    /// Replace every match and return how many were replaced.
    ///
    /// Matches are replaced from last to first so earlier positions stay
    /// valid. Each replacement is its own pair of undo actions.
    pub fn replace_all(&mut self) -> usize {
        let matches = self.search.results().to_vec();
        if matches.is_empty() {
            return 0;
        }
        let query = self.search.query().to_string();
        let replacement = self.search.replacement().to_string();
        let mut after = self.cursor.position();
        for &start in matches.iter().rev() {
            after = self.replace_range(start, end_of_text(start, &query), &replacement);
        }
        self.selection.clear();
        self.cursor.set_position(&self.buffer, after);
        emit_log(
            LogLevel::Debug,
            &format!("replaced {} matches of {query:?}", matches.len()),
        );
        matches.len()
    }

    fn replace_range(&mut self, start: Position, end: Position, replacement: &str) -> Position {
        let start = self.delete_range_at(start, end, EditMode::Record);
        self.insert_at(start, replacement, EditMode::Record)
    }

    // ----- Clipboard -----

    /// Copy the selection. Returns `false` when nothing is selected.
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard) -> Result<bool> {
        let Some(text) = self.selected_text() else {
            return Ok(false);
        };
        clipboard.set_text(&text).inspect_err(|e| {
            emit_log(LogLevel::Warn, &format!("clipboard write failed: {e}"));
        })?;
        Ok(true)
    }

    /// Copy the selection, then delete it.
    ///
    /// The selection is only deleted once the clipboard accepted it.
    pub fn cut(&mut self, clipboard: &mut dyn Clipboard) -> Result<bool> {
        if !self.copy(clipboard)? {
            return Ok(false);
        }
        Ok(self.delete_selection())
    }

    /// Insert clipboard text at the cursor like [`insert`](Self::insert).
    ///
    /// Returns `false` when the clipboard holds no text.
    pub fn paste(&mut self, clipboard: &mut dyn Clipboard) -> Result<bool> {
        let text = clipboard.get_text().inspect_err(|e| {
            emit_log(LogLevel::Warn, &format!("clipboard read failed: {e}"));
        })?;
        match text {
            Some(text) if !text.is_empty() => {
                self.insert(&text);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    // ----- Files -----

    /// Replace the document with the file at `path`.
    ///
    /// On failure the session is left untouched. On success the cursor goes
    /// to the start, the selection and history are dropped, and the
    /// document is unmodified.
    pub fn load(&mut self, path: &Path, storage: &mut dyn Storage) -> Result<()> {
        let loaded = storage
            .read(path)
            .and_then(|bytes| TextBuffer::load(&bytes));
        let buffer = match loaded {
            Ok(buffer) => buffer,
            Err(e) => {
                emit_log(
                    LogLevel::Warn,
                    &format!("failed to load {}: {e}", path.display()),
                );
                return Err(e);
            }
        };

        self.buffer = buffer;
        self.cursor = Cursor::default();
        self.selection.clear();
        self.extending = false;
        self.history.clear();
        self.search.search(&self.buffer);
        self.saved_revision = self.buffer.revision();
        self.path = Some(path.to_path_buf());

        let lines = self.buffer.line_count();
        emit_log(
            LogLevel::Info,
            &format!("loaded {} ({lines} lines)", path.display()),
        );
        emit_event(
            "document_loaded",
            &format!("{{\"path\":{:?},\"lines\":{lines}}}", path.display().to_string()),
        );
        Ok(())
    }

    /// Write the document to `path` using the trailing-newline policy.
    pub fn save(&mut self, path: &Path, storage: &mut dyn Storage) -> Result<()> {
        let bytes = self.file_bytes();
        if let Err(e) = storage.write(path, &bytes) {
            emit_log(
                LogLevel::Warn,
                &format!("failed to save {}: {e}", path.display()),
            );
            return Err(e);
        }

        self.saved_revision = self.buffer.revision();
        self.path = Some(path.to_path_buf());

        emit_log(
            LogLevel::Info,
            &format!("saved {} ({} bytes)", path.display(), bytes.len()),
        );
        emit_event(
            "document_saved",
            &format!(
                "{{\"path\":{:?},\"bytes\":{}}}",
                path.display().to_string(),
                bytes.len()
            ),
        );
        Ok(())
    }

    /// Bytes that [`save`](Self::save) writes.
    ///
    /// Lines are joined with `\n`. Unless `preserve_trailing_newline` is
    /// set, one trailing empty line is dropped, which removes the final
    /// newline. Any empty lines above it are kept, so a document ending in
    /// several blank lines still ends with `\n`.
    #[must_use]
    pub fn file_bytes(&self) -> Vec<u8> {
        let mut bytes = self.buffer.serialize();
        let trailing_empty = self.buffer.line_count() > 1
            && self.buffer.line(self.buffer.line_count() - 1) == Some("");
        if !self.options.preserve_trailing_newline && trailing_empty {
            bytes.pop();
        }
        bytes
    }

    // ----- Commands -----

    /// Execute one command from the input layer.
    ///
    /// Only storage and clipboard failures produce errors; commands that
    /// have nothing to act on are no-ops.
    pub fn execute(
        &mut self,
        command: Command,
        storage: &mut dyn Storage,
        clipboard: &mut dyn Clipboard,
    ) -> Result<()> {
        match command {
            Command::MoveCursor { drow, dcol } => self.move_cursor(drow, dcol),
            Command::PlaceCursor { x, y } => self.place_cursor(x, y),
            Command::ExtendSelection(extend) => self.extend_selection(extend),
            Command::Insert(text) => self.insert(&text),
            Command::DeleteBackward => self.delete_backward(),
            Command::DeleteForward => self.delete_forward(),
            Command::DeleteSelection => {
                self.delete_selection();
            }
            Command::Undo => {
                self.undo();
            }
            Command::Redo => {
                self.redo();
            }
            Command::Find(query) => {
                self.find(&query);
            }
            Command::SetReplacement(replacement) => self.set_replacement(&replacement),
            Command::Replace => {
                self.replace_current();
            }
            Command::ReplaceAll => {
                self.replace_all();
            }
            Command::NextMatch => {
                self.next_match();
            }
            Command::PrevMatch => {
                self.prev_match();
            }
            Command::GotoLine(line) => self.goto_line(line),
            Command::MoveWord(direction) => self.move_word(direction),
            Command::LineStart => self.move_to_line_start(),
            Command::LineEnd => self.move_to_line_end(),
            Command::SelectAll => self.select_all(),
            Command::Copy => {
                self.copy(clipboard)?;
            }
            Command::Cut => {
                self.cut(clipboard)?;
            }
            Command::Paste => {
                self.paste(clipboard)?;
            }
            Command::Load(path) => self.load(&path, storage)?,
            Command::Save(path) => self.save(&path, storage)?,
        }
        Ok(())
    }
}
