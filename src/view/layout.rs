//! Screen layout: input row, entry container, status bar.

use crate::state::AppState;
use crate::view::constants::{BUTTON_WIDTH, INPUT_ROW_HEIGHT, STATUS_BAR_HEIGHT, STATUS_HINTS};
use crate::view::{EntryParagraphs, InputField, SubmitButton, WidgetStyles};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Where each part of the screen goes for a given frame size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Bordered text field
    pub field: Rect,
    /// Submit button, right of the field
    pub button: Rect,
    /// Entry container
    pub entries: Rect,
    /// One-line key hints
    pub status: Rect,
}

/// Split `area` into the widget regions.
///
/// The button area is reserved whether or not the button is visible.
pub fn calculate_areas(area: Rect) -> ScreenAreas {
    let [input_row, entries, status] = Layout::vertical([
        Constraint::Length(INPUT_ROW_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(area);

    let [field, button] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(BUTTON_WIDTH)])
            .areas(input_row);

    ScreenAreas {
        field,
        button,
        entries,
        status,
    }
}

/// Render the whole widget for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &WidgetStyles) {
    let areas = calculate_areas(frame.area());

    frame.render_widget(InputField::new(&state.input, styles), areas.field);
    frame.render_widget(
        SubmitButton::new(state.button_visible, styles),
        areas.button,
    );
    frame.render_widget(EntryParagraphs::new(&state.entries, styles), areas.entries);
    frame.render_widget(
        Paragraph::new(Line::from(format!(" {}", STATUS_HINTS))).style(styles.status),
        areas.status,
    );
}
