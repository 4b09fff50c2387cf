//! Submit button visibility follows the text field.

use crate::model::trim_field;
use crate::state::AppState;

/// Handle an `input` notification.
///
/// The button is visible exactly when the trimmed field value is non-empty.
/// Nothing else changes.
pub fn handle_input(state: &mut AppState) {
    state.button_visible = !trim_field(state.input.value()).is_empty();
}
