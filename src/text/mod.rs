//! Document model and editing session.
//!
//! Text is stored as a list of lines without their `\n` separators.
//! Positions are `(row, col)` pairs where `col` counts Unicode scalar values;
//! byte offsets are only used internally when slicing line strings.
//!
//! Key types:
//!
//! - [`TextBuffer`]: line storage with insert/delete primitives
//! - [`Cursor`]: position with a sticky preferred column
//! - [`Selection`]: anchor-based selection ending at the cursor
//! - [`History`]: per-edit undo/redo stacks
//! - [`SearchState`]: literal search results
//! - [`Editor`]: the session that owns all of the above
//!
//! # Examples
//!
//! ```
//! use textcore::TextBuffer;
//!
//! let mut buffer = TextBuffer::with_text("Hello, world!");
//! assert_eq!(buffer.len_chars(), 13);
//! assert_eq!(buffer.line_count(), 1);
//!
//! let end = buffer.insert(textcore::Position::new(0, 5), "\nand");
//! assert_eq!(buffer.to_string(), "Hello\nand, world!");
//! assert_eq!(end, textcore::Position::new(1, 3));
//! ```

mod buffer;
mod cursor;
mod history;
mod search;
mod selection;
mod session;

pub use buffer::{Position, TextBuffer, byte_offset_of_col, col_of_byte_offset, end_of_text};
pub use cursor::{Cursor, CursorMove, Direction};
pub use history::{Action, ActionKind, EditMode, History};
pub use search::SearchState;
pub use selection::Selection;
pub use session::Editor;
