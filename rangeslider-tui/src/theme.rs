//! Slate/cyan theme tokens for the range slider TUI.
//!
//! The slider's own colours come from its `SliderStyle` (converted with
//! [`rgba`]); everything around it uses the tokens below.
//!
//! # Color Palette
//! - **Accent**: Electric cyan (active thumb, key hints)
//! - **Thumb**: Light gray (idle thumbs)
//! - **Warning**: Neon orange (rejected input)
//! - **Muted**: Steel blue (secondary text)

use ratatui::style::{Color, Modifier, Style};

use rangeslider_core::Rgba;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Electric cyan accent (focus, active thumb)
    pub accent: Color,
    /// Idle thumb fill
    pub thumb: Color,
    /// Neon orange (warnings)
    pub warning: Color,
    /// Hot pink (errors)
    pub negative: Color,
    /// Steel blue (muted text)
    pub muted: Color,
    /// White (primary text)
    pub text_primary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::slate()
    }
}

impl Theme {
    pub fn slate() -> Self {
        Self {
            accent: Color::Rgb(0, 255, 255),
            thumb: Color::Rgb(220, 220, 220),
            warning: Color::Rgb(255, 140, 0),
            negative: Color::Rgb(255, 20, 147),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
        }
    }

    /// Thumb colour, brighter while it is being dragged.
    pub fn thumb_color(&self, highlighted: bool) -> Color {
        if highlighted {
            self.accent
        } else {
            self.thumb
        }
    }
}

/// Convert a slider colour hint to a terminal colour.
pub fn rgba(c: Rgba) -> Color {
    let (r, g, b) = c.to_rgb8();
    Color::Rgb(r, g, b)
}

pub fn accent() -> Style {
    Style::default().fg(Theme::default().accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(Theme::default().muted)
}

pub fn warning() -> Style {
    Style::default().fg(Theme::default().warning)
}

pub fn negative() -> Style {
    Style::default().fg(Theme::default().negative)
}

pub fn text() -> Style {
    Style::default().fg(Theme::default().text_primary)
}

pub fn panel_border() -> Style {
    Style::default().fg(Theme::default().accent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rangeslider_core::SliderStyle;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.accent, Color::Rgb(0, 255, 255));
    }

    #[test]
    fn test_thumb_color() {
        let theme = Theme::default();
        assert_eq!(theme.thumb_color(true), theme.accent);
        assert_eq!(theme.thumb_color(false), theme.thumb);
    }

    #[test]
    fn test_rgba_conversion() {
        let style = SliderStyle::default();
        assert_eq!(rgba(style.track_tint), Color::Rgb(41, 51, 64));
    }
}
