//! Top-level UI state and event dispatch.

use crate::model::{EntryList, DEFAULT_CAPACITY, MAX_ENTRY_CHARS};
use crate::state::{input_watcher, list_manager, InputState, SubmitOutcome};
use std::num::NonZeroUsize;

/// Notifications delivered by the presentation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// The text field value changed.
    Input,
    /// The submit button was clicked.
    Click,
}

/// Everything the widget owns: the field, the button flag and the list.
///
/// Events are handled one at a time through [`AppState::dispatch`]; each
/// call runs to completion before the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// Text field contents.
    pub input: InputState,
    /// Whether the submit button is shown.
    pub button_visible: bool,
    /// Accepted entries, oldest first.
    pub entries: EntryList,
    /// Maximum entry length in characters.
    pub max_length: usize,
}

impl AppState {
    /// Empty field, hidden button, empty list with default limits.
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_CAPACITY, MAX_ENTRY_CHARS)
    }

    /// Empty state with a custom list capacity and entry length limit.
    pub fn with_limits(capacity: NonZeroUsize, max_length: usize) -> Self {
        Self {
            input: InputState::new(),
            button_visible: false,
            entries: EntryList::new(capacity),
            max_length,
        }
    }

    /// Route a notification to its handler.
    ///
    /// Returns the submit outcome for `Click`, `None` for `Input`.
    pub fn dispatch(&mut self, event: UiEvent) -> Option<SubmitOutcome> {
        match event {
            UiEvent::Input => {
                input_watcher::handle_input(self);
                None
            }
            UiEvent::Click => Some(list_manager::handle_submit(self)),
        }
    }

    /// Replace the field with `f(field)` and fire an `input` notification.
    pub fn edit_input(&mut self, f: impl FnOnce(InputState) -> InputState) {
        let input = std::mem::take(&mut self.input);
        self.input = f(input);
        self.dispatch(UiEvent::Input);
    }

    /// Replace the field with `f(field)` without any notification.
    ///
    /// For cursor movement, which leaves the value unchanged.
    pub fn move_cursor(&mut self, f: impl FnOnce(InputState) -> InputState) {
        let input = std::mem::take(&mut self.input);
        self.input = f(input);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
