//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod input_field;
pub mod layout;
mod paragraphs;
mod styles;
mod submit_button;

pub use input_field::InputField;
pub use paragraphs::EntryParagraphs;
pub use styles::{ColorConfig, WidgetStyles};
pub use submit_button::SubmitButton;

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::KeyAction;
use crate::state::{input_handler, AppState, SubmitOutcome, UiEvent};
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste,
        EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
        MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: WidgetStyles,
    /// Last rendered button area (for mouse click detection)
    last_button_area: Option<Rect>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen, mouse capture and
    /// bracketed paste.
    pub fn new(app_state: AppState, styles: WidgetStyles) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        stdout.execute(EnableBracketedPaste)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles,
            last_button_area: None,
        })
    }

    /// Run the main event loop
    ///
    /// Blocks on the next terminal event, handles it completely, redraws,
    /// then reads the next one. Returns when the user quits (Esc or Ctrl+C).
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let quit = match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Mouse(mouse) => {
                    self.handle_mouse(mouse);
                    false
                }
                Event::Paste(text) => {
                    self.handle_paste(&text);
                    false
                }
                // Layout is recomputed on every draw
                Event::Resize(..) => false,
                _ => continue,
            };

            if quit {
                return Ok(());
            }

            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c')
            && key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT)
        {
            return true;
        }

        // Text field keys are handled before key binding dispatch.
        // Value edits fire `input`, cursor moves do not.
        match key.code {
            KeyCode::Char(ch) if is_text_input(key.modifiers) => {
                self.app_state
                    .edit_input(|input| input_handler::handle_char_input(input, ch));
                return false;
            }
            KeyCode::Backspace => {
                self.app_state.edit_input(input_handler::handle_backspace);
                return false;
            }
            KeyCode::Delete => {
                self.app_state.edit_input(input_handler::handle_delete);
                return false;
            }
            KeyCode::Left => {
                self.app_state.move_cursor(input_handler::handle_cursor_left);
                return false;
            }
            KeyCode::Right => {
                self.app_state.move_cursor(input_handler::handle_cursor_right);
                return false;
            }
            KeyCode::Home => {
                self.app_state.move_cursor(input_handler::handle_cursor_home);
                return false;
            }
            KeyCode::End => {
                self.app_state.move_cursor(input_handler::handle_cursor_end);
                return false;
            }
            _ => {} // Fall through to key binding dispatch
        }

        let action = match self.key_bindings.get(key) {
            Some(action) => action,
            None => return false, // Unknown key, ignore
        };

        match action {
            KeyAction::Quit => return true,
            KeyAction::Submit => self.click(),
            KeyAction::ClearInput => self.app_state.edit_input(input_handler::handle_clear),
        }

        false
    }

    /// Handle a single mouse event
    ///
    /// A left click on the visible button submits. The hidden button is
    /// not clickable.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if !self.app_state.button_visible {
            return;
        }

        let Some(button_area) = self.last_button_area else {
            return;
        };

        if button_area.contains((mouse.column, mouse.row).into()) {
            self.click();
        }
    }

    /// Insert pasted text at the cursor
    fn handle_paste(&mut self, text: &str) {
        self.app_state
            .edit_input(|input| input_handler::handle_paste(input, text));
    }

    /// Fire a click on the submit button
    fn click(&mut self) {
        if let Some(SubmitOutcome::Appended { evicted }) = self.app_state.dispatch(UiEvent::Click)
        {
            debug!(
                entries = self.app_state.entries.len(),
                evicted = evicted.is_some(),
                "submit accepted"
            );
        }
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width, size.height);
        self.last_button_area = Some(layout::calculate_areas(frame_area).button);

        self.terminal.draw(|frame| {
            layout::render_layout(frame, &self.app_state, &self.styles);
        })?;

        Ok(())
    }
}

/// Whether a character key with `modifiers` should be typed into the field.
///
/// Ctrl or Alt alone make a shortcut. Both together are AltGr on Windows and
/// produce ordinary text.
fn is_text_input(modifiers: KeyModifiers) -> bool {
    let chord = modifiers & (KeyModifiers::CONTROL | KeyModifiers::ALT);
    chord.is_empty() || chord == KeyModifiers::CONTROL | KeyModifiers::ALT
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.
//
// DO NOT use these in production code.

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used in every test
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// Skips terminal initialization. Used by acceptance test harness.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        styles: WidgetStyles,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            styles,
            last_button_area: None,
        }
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn app_state_mut(&mut self) -> &mut AppState {
        &mut self.app_state
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse)
    }

    pub(crate) fn handle_paste_test(&mut self, text: &str) {
        self.handle_paste(text)
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub(crate) fn last_button_area(&self) -> Option<Rect> {
        self.last_button_area
    }
}

/// Initialize and run the TUI application with a resolved configuration
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_config(config: &ResolvedConfig, colors: ColorConfig) -> Result<(), TuiError> {
    let app_state = AppState::with_limits(config.capacity(), config.max_length);
    let mut app = TuiApp::new(app_state, WidgetStyles::with_color_config(colors))?;

    info!(
        capacity = config.capacity,
        max_length = config.max_length,
        "TUI started"
    );

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, bracketed paste and mouse capture, and leaves the
/// alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableBracketedPaste)?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_app_tests.rs"]
mod tests;
