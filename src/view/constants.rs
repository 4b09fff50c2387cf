//! Layout dimension constants for TUI rendering.

/// Height of the input row in lines (border + field + border).
pub const INPUT_ROW_HEIGHT: u16 = 3;

/// Width of the submit button including its border.
///
/// The space is reserved even while the button is hidden so the field does
/// not jump when the button appears.
pub const BUTTON_WIDTH: u16 = 9;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Title of the text field block.
pub const FIELD_TITLE: &str = "Text";

/// Label drawn inside the submit button.
pub const BUTTON_LABEL: &str = "Add";

/// Prefix of an entry's first line.
pub const ENTRY_MARKER: &str = "• ";

/// Prefix of an entry's further lines, same width as the marker.
pub const CONTINUATION_INDENT: &str = "  ";

/// Key hints shown in the status bar.
pub const STATUS_HINTS: &str = "Enter add · Ctrl+U clear · Esc quit";
