//! Color palette for the TUI.
//!
//! Two explicit palettes, selected by the persisted theme setting.

use crate::config::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Color palette for the TUI.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Primary accent color (for active elements)
    pub accent: Color,
    /// Success/positive color
    pub success: Color,
    /// Warning color
    pub warning: Color,
    /// Error/danger color
    pub error: Color,
    /// Text color
    pub text: Color,
    /// Dim text color
    pub text_dim: Color,
    /// Border color for active panes
    pub border_active: Color,
    /// Border color for inactive panes
    pub border_inactive: Color,
    /// Background color
    pub bg: Color,
}

impl Palette {
    /// Palette matching the persisted theme setting.
    pub fn for_theme(theme: Theme) -> Self {
        if theme.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Dark palette with explicit colors.
    pub fn dark() -> Self {
        Self {
            accent: Color::Rgb(97, 175, 239),   // Light blue
            success: Color::Rgb(152, 195, 121), // Green
            warning: Color::Rgb(229, 192, 123), // Yellow
            error: Color::Rgb(224, 108, 117),   // Red
            text: Color::Rgb(171, 178, 191),    // Light gray
            text_dim: Color::Rgb(92, 99, 112),  // Dark gray
            border_active: Color::Rgb(97, 175, 239),
            border_inactive: Color::Rgb(62, 68, 81),
            bg: Color::Rgb(40, 44, 52), // Dark background
        }
    }

    /// Light palette with explicit colors.
    pub fn light() -> Self {
        Self {
            accent: Color::Rgb(0, 122, 204), // Blue
            success: Color::Rgb(34, 139, 34), // Forest green
            warning: Color::Rgb(205, 133, 0), // Orange
            error: Color::Rgb(205, 49, 49),   // Red
            text: Color::Rgb(51, 51, 51), // Dark gray
            text_dim: Color::Rgb(128, 128, 128),
            border_active: Color::Rgb(0, 122, 204),
            border_inactive: Color::Rgb(200, 200, 200),
            bg: Color::Rgb(255, 255, 255),
        }
    }

    // === Style helpers ===

    /// Style for normal text.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Style for dimmed/secondary text.
    pub fn text_dim_style(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    /// Style for accent/highlighted text.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for error indicators.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for active pane borders.
    pub fn border_active_style(&self) -> Style {
        Style::default().fg(self.border_active)
    }

    /// Style for inactive pane borders.
    pub fn border_inactive_style(&self) -> Style {
        Style::default().fg(self.border_inactive)
    }

    /// Style for selected list items.
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.bg)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for keyboard shortcut hints.
    pub fn shortcut_style(&self) -> Style {
        Style::default().fg(self.warning)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_follows_theme() {
        let dark = Palette::for_theme(Theme::Dark);
        let light = Palette::for_theme(Theme::Light);
        assert_eq!(dark.bg, Color::Rgb(40, 44, 52));
        assert_eq!(light.bg, Color::Rgb(255, 255, 255));
    }
}
