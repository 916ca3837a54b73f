//! Form styling configuration.
//!
//! Distinct styles for section headers, the selected row, and each
//! control state, with a color switch honoring `--no-color` and the
//! `NO_COLOR` environment variable.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from the resolved config's color flag and the
    /// environment.
    ///
    /// Colors are off when the flag says so or when `NO_COLOR` is set
    /// (any value).
    pub fn from_env_and_config(color_enabled: bool) -> Self {
        let enabled = color_enabled && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== FormStyles =====

/// Styles used by the form renderer.
#[derive(Debug, Clone)]
pub struct FormStyles {
    /// Section header titles.
    pub section_header: Style,
    /// Row titles.
    pub row_title: Style,
    /// Applied on top of the row under the cursor.
    pub selected: Style,
    /// Switch indicator when on.
    pub switch_on: Style,
    /// Switch indicator when off.
    pub switch_off: Style,
    /// Slider track and unselected picker options.
    pub control: Style,
    /// Slider marker and the selected picker option.
    pub control_active: Style,
    /// Status bar key hints.
    pub hint: Style,
}

impl FormStyles {
    /// Styles for the given color configuration; all-default styles when
    /// colors are disabled.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                section_header: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                row_title: Style::default(),
                selected: Style::default().add_modifier(Modifier::REVERSED),
                switch_on: Style::default().fg(Color::Green),
                switch_off: Style::default().fg(Color::DarkGray),
                control: Style::default().fg(Color::DarkGray),
                control_active: Style::default().fg(Color::Yellow),
                hint: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                section_header: Style::default().add_modifier(Modifier::BOLD),
                row_title: Style::default(),
                selected: Style::default().add_modifier(Modifier::REVERSED),
                switch_on: Style::default(),
                switch_off: Style::default(),
                control: Style::default(),
                control_active: Style::default(),
                hint: Style::default(),
            }
        }
    }
}

impl Default for FormStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_config(true))
    }
}
