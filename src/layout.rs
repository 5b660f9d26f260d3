//! Pixel layout of a single line.
//!
//! [`LayoutMetrics`] owns every translation between codepoint columns and
//! visual x positions. A tab is one codepoint but spans up to `tab_width`
//! cells, so neither the buffer nor the cursor can do this mapping alone.
//!
//! Widths come from a pluggable per-codepoint function. The default is
//! monospace (`char_width` for every codepoint); [`LayoutMetrics::terminal`]
//! measures cells with `unicode-width`, and a proportional renderer can
//! supply its own glyph advances through [`LayoutMetrics::with_width_fn`].
//!
//! ```
//! use textcore::LayoutMetrics;
//!
//! let metrics = LayoutMetrics::new(4, 10);
//! // "a" is 10px, the tab runs to the next 40px stop, "b" adds 10px.
//! assert_eq!(metrics.measure_width("a\tb", 3), 50);
//! assert_eq!(metrics.column_at("a\tb", 44), 2);
//! ```

use crate::unicode::{WidthMethod, display_width_char};
use std::fmt;
use std::sync::Arc;

/// Per-codepoint advance in pixels.
pub type WidthFn = Arc<dyn Fn(char) -> u32 + Send + Sync>;

/// Deterministic line layout given tab width, character width and a width function.
#[derive(Clone)]
pub struct LayoutMetrics {
    tab_width: u32,
    char_width: u32,
    line_height: u32,
    width_fn: Option<WidthFn>,
}

impl fmt::Debug for LayoutMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutMetrics")
            .field("tab_width", &self.tab_width)
            .field("char_width", &self.char_width)
            .field("line_height", &self.line_height)
            .field("custom_width_fn", &self.width_fn.is_some())
            .finish()
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self::new(4, 1)
    }
}

impl LayoutMetrics {
    /// Monospace metrics. `tab_width` below 1 is treated as 1.
    #[must_use]
    pub fn new(tab_width: u32, char_width: u32) -> Self {
        Self {
            tab_width: tab_width.max(1),
            char_width,
            line_height: 1,
            width_fn: None,
        }
    }

    /// Terminal cell metrics: one pixel per cell, wide codepoints take two.
    #[must_use]
    pub fn terminal(tab_width: u32, method: WidthMethod) -> Self {
        Self::new(tab_width, 1)
            .with_width_fn(Arc::new(move |ch| display_width_char(ch, method) as u32))
    }

    /// Replace the per-codepoint width function.
    #[must_use]
    pub fn with_width_fn(mut self, width_fn: WidthFn) -> Self {
        self.width_fn = Some(width_fn);
        self
    }

    /// Set the row height used by [`row_at`](Self::row_at). Values below 1 act as 1.
    #[must_use]
    pub fn with_line_height(mut self, line_height: u32) -> Self {
        self.line_height = line_height.max(1);
        self
    }

    #[must_use]
    pub fn tab_width(&self) -> u32 {
        self.tab_width
    }

    #[must_use]
    pub fn char_width(&self) -> u32 {
        self.char_width
    }

    #[must_use]
    pub fn line_height(&self) -> u32 {
        self.line_height
    }

    /// Pixel span between two tab stops.
    #[must_use]
    pub fn tab_stop(&self) -> u32 {
        self.tab_width.saturating_mul(self.char_width)
    }

    /// Advance `current_x` past `ch`.
    ///
    /// A tab moves to the next multiple of [`tab_stop`](Self::tab_stop)
    /// strictly greater than `current_x`.
    #[must_use]
    pub fn advance(&self, current_x: u32, ch: char) -> u32 {
        if ch == '\t' {
            let stop = self.tab_stop();
            if stop == 0 {
                return current_x;
            }
            return (current_x / stop + 1).saturating_mul(stop);
        }
        let width = match &self.width_fn {
            Some(width_fn) => width_fn(ch),
            None => self.char_width,
        };
        current_x.saturating_add(width)
    }

    /// Width of the first `col_count` codepoints of `line`.
    #[must_use]
    pub fn measure_width(&self, line: &str, col_count: usize) -> u32 {
        line.chars()
            .take(col_count)
            .fold(0, |x, ch| self.advance(x, ch))
    }

    /// Column whose visual midpoint first exceeds `pixel_x`.
    ///
    /// Returns the line length when `pixel_x` lies past the end of the line.
    #[must_use]
    pub fn column_at(&self, line: &str, pixel_x: u32) -> usize {
        let target = u64::from(pixel_x) * 2;
        let mut x = 0u32;
        let mut count = 0;
        for (col, ch) in line.chars().enumerate() {
            let next = self.advance(x, ch);
            // Compare doubled values to keep the midpoint exact.
            if u64::from(x) + u64::from(next) > target {
                return col;
            }
            x = next;
            count = col + 1;
        }
        count
    }

    /// Document row under `pixel_y`, before clamping to the line count.
    #[must_use]
    pub fn row_at(&self, pixel_y: u32) -> usize {
        (pixel_y / self.line_height.max(1)) as usize
    }
}
