//! Submit button widget.

use crate::view::constants::BUTTON_LABEL;
use crate::view::WidgetStyles;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Submit button. Draws nothing while hidden.
pub struct SubmitButton<'a> {
    visible: bool,
    styles: &'a WidgetStyles,
}

impl<'a> SubmitButton<'a> {
    /// Button widget, drawn only when `visible`.
    pub fn new(visible: bool, styles: &'a WidgetStyles) -> Self {
        Self { visible, styles }
    }
}

impl Widget for SubmitButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.visible {
            return;
        }

        Paragraph::new(BUTTON_LABEL)
            .alignment(Alignment::Center)
            .style(self.styles.button)
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}
