//! Text field contents.

/// Current raw value of the text field and the cursor within it.
///
/// The cursor is a character index in `0..=value.chars().count()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    value: String,
    cursor: usize,
}

impl InputState {
    /// Empty field, cursor at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Field with `value` and the cursor at its end.
    pub fn with_value(value: impl Into<String>) -> Self {
        let mut state = Self::new();
        state.set_value(value);
        state
    }

    /// Raw, untrimmed value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position as a character index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of characters in the value.
    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// True when the value has no characters at all, whitespace included.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Overwrite the value and move the cursor to the end.
    ///
    /// Does not notify anyone. Callers that model user typing dispatch
    /// `UiEvent::Input` afterwards.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.char_len();
    }

    /// Empty the field.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Byte offset of character index `char_idx`, clamped to the end.
    pub(crate) fn byte_offset(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(offset, _)| offset)
            .unwrap_or(self.value.len())
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut String, &mut usize) {
        (&mut self.value, &mut self.cursor)
    }
}
