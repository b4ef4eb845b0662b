//! Color handling and the shared style palette.

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
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Styles shared by every pane.
///
/// With colors disabled, color attributes drop away but emphasis
/// modifiers stay, so the selection remains visible on plain terminals.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Attribute headings in the table.
    pub heading: Style,
    /// Selected row or list entry in the focused pane.
    pub selection: Style,
    /// Availability badges in flag cells.
    pub badge: Style,
    /// Border and title of the focused pane.
    pub focused_border: Style,
    /// Border of unfocused panes.
    pub border: Style,
    /// Muted hint text.
    pub muted: Style,
    /// Category headers in the help overlay.
    pub section: Style,
    /// Key names in help lines and status hints.
    pub key: Style,
}

impl Palette {
    /// Build the palette for a color configuration.
    pub fn new(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                heading: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                selection: Style::default().add_modifier(Modifier::REVERSED),
                badge: Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                focused_border: Style::default().fg(Color::Cyan),
                border: Style::default().fg(Color::DarkGray),
                muted: Style::default().fg(Color::DarkGray),
                section: Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
                key: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            }
        } else {
            Self {
                heading: Style::default().add_modifier(Modifier::BOLD),
                selection: Style::default().add_modifier(Modifier::REVERSED),
                badge: Style::default().add_modifier(Modifier::BOLD),
                focused_border: Style::default(),
                border: Style::default().add_modifier(Modifier::DIM),
                muted: Style::default().add_modifier(Modifier::DIM),
                section: Style::default().add_modifier(Modifier::BOLD),
                key: Style::default().add_modifier(Modifier::BOLD),
            }
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
