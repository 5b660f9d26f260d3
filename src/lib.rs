//! `textcore` - editing core for a plain-text editor
//!
//! Line-based document storage, cursor and selection models, per-edit
//! undo/redo, literal search and replace, and pixel layout helpers. Files
//! and the clipboard are reached through the [`Storage`] and [`Clipboard`]
//! traits; input arrives as [`Command`]s executed by an [`Editor`].
//!
//! # Example
//!
//! ```
//! use std::path::PathBuf;
//! use textcore::{Command, Editor, MemoryClipboard, MemoryStorage};
//!
//! let mut storage = MemoryStorage::new();
//! let mut clipboard = MemoryClipboard::new();
//! let mut editor = Editor::new();
//!
//! editor
//!     .execute(Command::Insert("hello".into()), &mut storage, &mut clipboard)
//!     .unwrap();
//! editor
//!     .execute(Command::Save(PathBuf::from("hello.txt")), &mut storage, &mut clipboard)
//!     .unwrap();
//! assert_eq!(storage.get("hello.txt"), Some(&b"hello"[..]));
//! ```

// Crate-level lint configuration
#![forbid(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional pixel/column casts
#![allow(clippy::cast_sign_loss)] // Intentional delta conversions
#![allow(clippy::cast_possible_wrap)] // Intentional delta conversions
#![allow(clippy::module_name_repetitions)] // Allow TextBuffer in text etc
#![allow(clippy::struct_excessive_bools)] // Options need multiple flags
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Commands are passed by value
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference
#![allow(clippy::needless_collect)] // Collect for assertions is clear

pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod io;
pub mod layout;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use command::Command;
pub use config::{DEFAULT_MAX_HISTORY_DEPTH, EditorOptions};
pub use error::{Error, Result};
pub use event::{
    LogLevel, clear_event_callback, clear_log_callback, emit_event, emit_log, set_event_callback,
    set_log_callback,
};
pub use io::{Clipboard, FsStorage, MemoryClipboard, MemoryStorage, Storage};
pub use layout::{LayoutMetrics, WidthFn};

// Re-export document types
pub use text::{
    Action, ActionKind, Cursor, CursorMove, Direction, EditMode, Editor, History, Position,
    SearchState, Selection, TextBuffer, byte_offset_of_col, col_of_byte_offset, end_of_text,
};
pub use unicode::WidthMethod;
