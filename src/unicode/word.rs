//! Word boundaries within a single line, in codepoint columns.

use crate::text::{byte_offset_of_col, col_of_byte_offset};
use unicode_segmentation::UnicodeSegmentation;

fn is_word_segment(segment: &str) -> bool {
    segment
        .chars()
        .next()
        .is_some_and(|ch| ch.is_alphanumeric() || ch == '_')
}

/// Column just past the end of the next word at or after `col`.
///
/// Returns the line length when no word follows.
#[must_use]
pub fn next_word_boundary(line: &str, col: usize) -> usize {
    let from = byte_offset_of_col(line, col);
    for (start, segment) in line.split_word_bound_indices() {
        let end = start + segment.len();
        if end > from && is_word_segment(segment) {
            return col_of_byte_offset(line, end);
        }
    }
    line.chars().count()
}

/// Column of the start of the word before `col`.
///
/// Returns 0 when no word precedes.
#[must_use]
pub fn prev_word_boundary(line: &str, col: usize) -> usize {
    let until = byte_offset_of_col(line, col);
    let mut found = 0;
    for (start, segment) in line.split_word_bound_indices() {
        if start >= until {
            break;
        }
        if is_word_segment(segment) {
            found = start;
        }
    }
    col_of_byte_offset(line, found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_word_boundary() {
        assert_eq!(next_word_boundary("hello world test", 0), 5);
        assert_eq!(next_word_boundary("hello world test", 5), 11);
        assert_eq!(next_word_boundary("hello world test", 16), 16);
        assert_eq!(next_word_boundary("   ", 0), 3);
        assert_eq!(next_word_boundary("abc", 99), 3);
    }

    #[test]
    fn test_prev_word_boundary() {
        assert_eq!(prev_word_boundary("hello world test", 16), 12);
        assert_eq!(prev_word_boundary("hello world test", 12), 6);
        assert_eq!(prev_word_boundary("hello world test", 3), 0);
        assert_eq!(prev_word_boundary("  ", 2), 0);
    }

    #[test]
    fn test_multibyte_words() {
        // "héllo wörld": columns count codepoints, not bytes.
        assert_eq!(next_word_boundary("héllo wörld", 0), 5);
        assert_eq!(prev_word_boundary("héllo wörld", 11), 6);
    }
}
