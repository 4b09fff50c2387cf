//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod input_handler;
pub mod input_state;
pub mod input_watcher;
pub mod list_manager;

// Re-export for convenience
pub use app_state::{AppState, UiEvent};
pub use input_state::InputState;
pub use input_watcher::handle_input;
pub use list_manager::{handle_submit, SubmitOutcome};
