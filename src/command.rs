//! Editing commands produced by the input layer.

use crate::text::Direction;
use std::path::PathBuf;

/// A single editing command.
///
/// The input collaborator maps raw key and pointer events to these; the
/// session executes them one at a time with
/// [`Editor::execute`](crate::Editor::execute).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Move by rows and codepoint columns. Vertical movement wins when both are set.
    MoveCursor { drow: isize, dcol: isize },
    /// Place the cursor under a pointer at document pixel coordinates.
    PlaceCursor { x: u32, y: u32 },
    /// Start (`true`) or stop (`false`) extending the selection with movement.
    ExtendSelection(bool),
    /// Insert text at the cursor, replacing a non-empty selection.
    Insert(String),
    DeleteBackward,
    DeleteForward,
    DeleteSelection,
    Undo,
    Redo,
    /// Set the query, search, and jump to the nearest match.
    Find(String),
    /// Set the text used by `Replace` and `ReplaceAll`.
    SetReplacement(String),
    /// Replace the match under the cursor, then advance.
    Replace,
    ReplaceAll,
    NextMatch,
    PrevMatch,
    /// Jump to a 1-based line number.
    GotoLine(usize),
    MoveWord(Direction),
    LineStart,
    LineEnd,
    SelectAll,
    Copy,
    Cut,
    Paste,
    Load(PathBuf),
    Save(PathBuf),
}
