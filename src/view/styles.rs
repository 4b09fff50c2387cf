//! Widget styling configuration.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colors disabled regardless of environment.
    pub fn monochrome() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== WidgetStyles =====

/// Styles for the field, cursor, button, entries and status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetStyles {
    /// Text field border and value.
    pub field: Style,
    /// Cell under the cursor.
    pub cursor: Style,
    /// Submit button.
    pub button: Style,
    /// Entry paragraphs.
    pub entry: Style,
    /// Key hints line.
    pub status: Style,
}

impl WidgetStyles {
    /// Styles for the given color configuration.
    ///
    /// Without colors the cursor is still marked with reverse video.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                field: Style::default(),
                cursor: Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                button: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                entry: Style::default().fg(Color::Cyan),
                status: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                field: Style::default(),
                cursor: Style::default().add_modifier(Modifier::REVERSED),
                button: Style::default(),
                entry: Style::default(),
                status: Style::default(),
            }
        }
    }
}

impl Default for WidgetStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
