//! Editor configuration.

use crate::layout::LayoutMetrics;

/// Default maximum number of undo actions to retain.
pub const DEFAULT_MAX_HISTORY_DEPTH: usize = 1000;

/// Options for an editing session.
///
/// Plain data with public fields; build one with struct update syntax:
///
/// ```
/// use textcore::EditorOptions;
///
/// let options = EditorOptions {
///     tab_width: 8,
///     ..EditorOptions::default()
/// };
/// assert_eq!(options.tab_width, 8);
/// assert!(options.preserve_trailing_newline);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditorOptions {
    /// Tab stop interval in character cells. Values below 1 act as 1.
    pub tab_width: u32,
    /// Pixel width of one character cell.
    pub char_width: u32,
    /// Pixel height of one row, used for pointer placement.
    pub line_height: u32,
    /// Write the implicit trailing empty line back out as a final newline.
    ///
    /// When `false`, saving drops a trailing empty line so the file ends
    /// without a newline.
    pub preserve_trailing_newline: bool,
    /// Maximum number of undo actions kept. Oldest actions are dropped first.
    pub max_history_depth: usize,
    /// Remove whitespace-only content from a row when the cursor leaves it.
    pub trim_blank_lines_on_leave: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            tab_width: 4,
            char_width: 1,
            line_height: 1,
            preserve_trailing_newline: true,
            max_history_depth: DEFAULT_MAX_HISTORY_DEPTH,
            trim_blank_lines_on_leave: false,
        }
    }
}

impl EditorOptions {
    /// Build monospace layout metrics from these options.
    #[must_use]
    pub fn metrics(&self) -> LayoutMetrics {
        LayoutMetrics::new(self.tab_width, self.char_width).with_line_height(self.line_height)
    }
}
