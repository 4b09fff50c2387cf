//! Entry container widget.

use crate::model::EntryList;
use crate::view::constants::{CONTINUATION_INDENT, ENTRY_MARKER};
use crate::view::WidgetStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Renders each entry as a paragraph, oldest at the top.
///
/// Every entry starts with a bullet and its further lines are indented, so
/// a multi-line entry stays distinguishable from several single-line ones.
///
/// The block title shows the fill level, e.g. `Entries 2/4`.
pub struct EntryParagraphs<'a> {
    entries: &'a EntryList,
    styles: &'a WidgetStyles,
}

impl<'a> EntryParagraphs<'a> {
    /// Container widget over `entries`.
    pub fn new(entries: &'a EntryList, styles: &'a WidgetStyles) -> Self {
        Self { entries, styles }
    }
}

impl Widget for EntryParagraphs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(
            "Entries {}/{}",
            self.entries.len(),
            self.entries.capacity()
        );

        let lines: Vec<Line> = self
            .entries
            .iter()
            .flat_map(|entry| entry_lines(entry.as_str(), self.styles.entry))
            .collect();

        Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(title))
            .render(area, buf);
    }
}

fn entry_lines(text: &str, style: Style) -> impl Iterator<Item = Line<'static>> + '_ {
    text.lines().enumerate().map(move |(i, line)| {
        let marker = if i == 0 { ENTRY_MARKER } else { CONTINUATION_INDENT };
        Line::from(vec![
            Span::styled(marker, style),
            Span::styled(line.to_string(), style),
        ])
    })
}
