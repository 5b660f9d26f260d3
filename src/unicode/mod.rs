//! Unicode utilities for display width and word boundaries.

mod width;
mod word;

pub use width::{WidthMethod, display_width_char};
pub use word::{next_word_boundary, prev_word_boundary};
