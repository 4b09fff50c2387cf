//! Domain-level keyboard actions independent of key bindings.

/// Actions that can be mapped to key bindings.
///
/// Text editing keys (printable characters, Backspace, Delete, arrows,
/// Home/End) always go to the text field and are not listed here. The
/// mapping from `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Click the submit button. Default: Enter
    Submit,
    /// Erase the whole text field. Default: Ctrl+u
    ClearInput,
    /// Exit the application. Default: Esc/Ctrl+c
    Quit,
}
