//! Text field editing (pure state transitions).
//!
//! Every function takes the field by value and returns the edited field.
//! None of them notify the input watcher; the caller dispatches
//! `UiEvent::Input` after an edit.

use crate::state::InputState;

/// Insert `ch` at the cursor and advance the cursor.
pub fn handle_char_input(mut state: InputState, ch: char) -> InputState {
    let offset = state.byte_offset(state.cursor());
    let (value, cursor) = state.parts_mut();
    value.insert(offset, ch);
    *cursor += 1;
    state
}

/// Insert pasted text at the cursor and move the cursor past it.
///
/// Newlines are kept; the field stores whatever was pasted and trimming
/// happens on submit.
pub fn handle_paste(mut state: InputState, text: &str) -> InputState {
    let offset = state.byte_offset(state.cursor());
    let (value, cursor) = state.parts_mut();
    value.insert_str(offset, text);
    *cursor += text.chars().count();
    state
}

/// Delete the character before the cursor. No-op at position 0.
pub fn handle_backspace(mut state: InputState) -> InputState {
    if state.cursor() == 0 {
        return state;
    }
    let offset = state.byte_offset(state.cursor() - 1);
    let (value, cursor) = state.parts_mut();
    value.remove(offset);
    *cursor -= 1;
    state
}

/// Delete the character under the cursor. No-op at the end.
pub fn handle_delete(mut state: InputState) -> InputState {
    if state.cursor() >= state.char_len() {
        return state;
    }
    let offset = state.byte_offset(state.cursor());
    let (value, _) = state.parts_mut();
    value.remove(offset);
    state
}

/// Move cursor left by one position.
/// Saturates at 0 (does not wrap).
pub fn handle_cursor_left(mut state: InputState) -> InputState {
    let (_, cursor) = state.parts_mut();
    *cursor = cursor.saturating_sub(1);
    state
}

/// Move cursor right by one position.
/// Saturates at the value length (does not wrap).
pub fn handle_cursor_right(mut state: InputState) -> InputState {
    let max_cursor = state.char_len();
    let (_, cursor) = state.parts_mut();
    *cursor = (*cursor + 1).min(max_cursor);
    state
}

/// Move cursor before the first character.
pub fn handle_cursor_home(mut state: InputState) -> InputState {
    let (_, cursor) = state.parts_mut();
    *cursor = 0;
    state
}

/// Move cursor past the last character.
pub fn handle_cursor_end(mut state: InputState) -> InputState {
    let max_cursor = state.char_len();
    let (_, cursor) = state.parts_mut();
    *cursor = max_cursor;
    state
}

/// Erase the whole field.
pub fn handle_clear(mut state: InputState) -> InputState {
    state.clear();
    state
}

// ===== Tests =====

#[cfg(test)]
#[path = "input_handler_tests.rs"]
mod tests;
