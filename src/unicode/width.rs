//! Display width of codepoints in terminal cells.

use unicode_width::UnicodeWidthChar;

/// Width calculation method for ambiguous-width characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthMethod {
    /// POSIX-like wcwidth: ambiguous width = 1.
    #[default]
    WcWidth,
    /// Unicode East Asian Width: ambiguous width = 2.
    Unicode,
}

/// Get the display width of a character in terminal cells.
///
/// Printable ASCII takes the fast path; control characters are zero width.
#[inline]
#[must_use]
pub fn display_width_char(c: char, method: WidthMethod) -> usize {
    if c.is_ascii() && (' '..='~').contains(&c) {
        return 1;
    }
    if c < ' ' {
        return 0;
    }
    match method {
        WidthMethod::WcWidth => UnicodeWidthChar::width(c).unwrap_or(0),
        WidthMethod::Unicode => UnicodeWidthChar::width_cjk(c).unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        assert_eq!(display_width_char('a', WidthMethod::WcWidth), 1);
        assert_eq!(display_width_char('~', WidthMethod::Unicode), 1);
    }

    #[test]
    fn test_cjk_width() {
        assert_eq!(display_width_char('漢', WidthMethod::WcWidth), 2);
        assert_eq!(display_width_char('字', WidthMethod::Unicode), 2);
    }

    #[test]
    fn test_control_and_combining() {
        assert_eq!(display_width_char('\t', WidthMethod::WcWidth), 0);
        assert_eq!(display_width_char('\u{0301}', WidthMethod::WcWidth), 0);
    }

    #[test]
    fn test_width_methods() {
        // Circled digit one is ambiguous width.
        let ch = '①';
        assert_eq!(display_width_char(ch, WidthMethod::WcWidth), 1);
        assert_eq!(display_width_char(ch, WidthMethod::Unicode), 2);
    }
}
