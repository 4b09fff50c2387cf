//! Text field widget.

use crate::state::InputState;
use crate::view::constants::FIELD_TITLE;
use crate::view::WidgetStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Text field widget.
/// Renders the value with a block cursor, scrolled so the cursor stays visible.
pub struct InputField<'a> {
    input: &'a InputState,
    styles: &'a WidgetStyles,
}

impl<'a> InputField<'a> {
    /// Field widget over `input`.
    pub fn new(input: &'a InputState, styles: &'a WidgetStyles) -> Self {
        Self { input, styles }
    }
}

impl Widget for InputField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(FIELD_TITLE)
            .style(self.styles.field);
        let inner = block.inner(area);
        block.render(area, buf);

        let window = FieldWindow::compute(
            self.input.value(),
            self.input.cursor(),
            usize::from(inner.width),
        );

        let line = Line::from(vec![
            Span::raw(window.before),
            Span::styled(window.at_cursor, self.styles.cursor),
            Span::raw(window.after),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}

/// The slice of the field that fits in the available columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FieldWindow {
    /// Visible text left of the cursor.
    pub before: String,
    /// Character under the cursor, a space at the end of the value.
    pub at_cursor: String,
    /// Visible text right of the cursor.
    pub after: String,
}

impl FieldWindow {
    /// Fit `value` into `width` columns around `cursor` (a char index).
    ///
    /// Text left of the cursor is preferred, so typing at the end keeps the
    /// tail visible. Newlines show as `↵`, other control characters as spaces.
    pub(crate) fn compute(value: &str, cursor: usize, width: usize) -> Self {
        let chars: Vec<char> = value.chars().map(display_char).collect();
        let cursor = cursor.min(chars.len());

        if width == 0 {
            return Self {
                before: String::new(),
                at_cursor: String::new(),
                after: String::new(),
            };
        }

        let cursor_char = chars.get(cursor).copied().unwrap_or(' ');
        let mut budget = width.saturating_sub(char_width(cursor_char).max(1));

        let mut start = cursor;
        while start > 0 {
            let w = char_width(chars[start - 1]);
            if w > budget {
                break;
            }
            budget -= w;
            start -= 1;
        }

        let mut end = (cursor + 1).min(chars.len());
        while end < chars.len() {
            let w = char_width(chars[end]);
            if w > budget {
                break;
            }
            budget -= w;
            end += 1;
        }

        Self {
            before: chars[start..cursor].iter().collect(),
            at_cursor: cursor_char.to_string(),
            after: chars[(cursor + 1).min(end)..end].iter().collect(),
        }
    }
}

fn display_char(c: char) -> char {
    match c {
        '\n' => '↵',
        c if c.is_control() => ' ',
        c => c,
    }
}

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}
