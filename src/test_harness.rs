//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions.

use crate::config::KeyBindings;
use crate::state::{AppState, SubmitOutcome, UiEvent};
use crate::view::{ColorConfig, TuiApp, WidgetStyles};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty trailing lines are removed to keep snapshots clean.
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend>. Two styles of driving are offered:
/// keyboard/mouse events as a user would produce them, and the DOM-like
/// `set_value` / `fire_input` / `click_button` trio that mirrors setting a
/// field value, dispatching `input` and calling `click()` directly.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

#[allow(dead_code)] // Not every helper is used by every test module
impl AcceptanceTestHarness {
    /// Fresh app with default limits and a 40x10 terminal
    pub fn new() -> Self {
        Self::with_state(AppState::new(), 40, 10)
    }

    /// App over an explicit initial state and terminal size
    pub fn with_state(app_state: AppState, width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("TestBackend terminal creation cannot fail");
        let app = TuiApp::new_for_test(
            terminal,
            app_state,
            KeyBindings::default(),
            WidgetStyles::with_color_config(ColorConfig::monochrome()),
        );

        Self { app, running: true }
    }

    /// Send a single key event
    ///
    /// Returns `true` if the app quit as a result of this key
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));

        if quit {
            self.running = false;
        }

        quit
    }

    /// Type text (sends individual character key events)
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break; // Quit encountered
            }
        }
    }

    /// Deliver a bracketed paste
    pub fn paste(&mut self, text: &str) {
        if self.running {
            self.app.handle_paste_test(text);
        }
    }

    /// Overwrite the field value without firing `input`
    pub fn set_value(&mut self, value: &str) {
        self.app.app_state_mut().input.set_value(value);
    }

    /// Fire an `input` notification
    pub fn fire_input(&mut self) {
        self.app.app_state_mut().dispatch(UiEvent::Input);
    }

    /// Set the value and fire `input`, like typing the whole string at once
    pub fn enter_value(&mut self, value: &str) {
        self.set_value(value);
        self.fire_input();
    }

    /// Fire a `click` notification regardless of button visibility
    pub fn click_button(&mut self) -> SubmitOutcome {
        self.app
            .app_state_mut()
            .dispatch(UiEvent::Click)
            .expect("Click always yields a submit outcome")
    }

    /// Send a left mouse click at the given cell
    pub fn click_at(&mut self, column: u16, row: u16) {
        if !self.running {
            return;
        }

        // Render first to ensure layout is calculated
        let _ = self.app.render_test();

        self.app.handle_mouse_test(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    /// Left-click the middle of the button area
    pub fn click_button_with_mouse(&mut self) {
        let _ = self.app.render_test();
        if let Some(area) = self.app.last_button_area() {
            self.click_at(area.x + area.width / 2, area.y + area.height / 2);
        }
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Entry texts, oldest first
    pub fn entry_texts(&self) -> Vec<String> {
        self.state()
            .entries
            .iter()
            .map(|entry| entry.as_str().to_string())
            .collect()
    }

    /// Check if app is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");

        buffer_to_string(self.app.terminal().backend().buffer())
    }
}

impl Default for AcceptanceTestHarness {
    fn default() -> Self {
        Self::new()
    }
}
