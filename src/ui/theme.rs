//! Color themes
//!
//! Two palettes: the LYRA navy/cyan dark theme and a paper light theme.

use ratatui::prelude::Color;
use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Colors every panel draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub elevated: Color,
    pub border: Color,
    pub text: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub profit: Color,
    pub loss: Color,
    pub warning: Color,
}

impl Palette {
    pub const fn dark() -> Self {
        Self {
            background: Color::Rgb(10, 14, 39),
            surface: Color::Rgb(26, 31, 58),
            elevated: Color::Rgb(37, 43, 77),
            border: Color::Rgb(47, 54, 89),
            text: Color::Rgb(255, 255, 255),
            text_muted: Color::Rgb(139, 147, 176),
            accent: Color::Rgb(0, 217, 255),
            profit: Color::Rgb(0, 255, 136),
            loss: Color::Rgb(255, 51, 102),
            warning: Color::Rgb(255, 184, 0),
        }
    }

    pub const fn light() -> Self {
        Self {
            background: Color::Rgb(248, 251, 255),
            surface: Color::Rgb(255, 255, 255),
            elevated: Color::Rgb(237, 241, 247),
            border: Color::Rgb(213, 220, 230),
            text: Color::Rgb(12, 22, 37),
            text_muted: Color::Rgb(91, 102, 120),
            accent: Color::Rgb(37, 99, 235),
            profit: Color::Rgb(14, 166, 108),
            loss: Color::Rgb(225, 29, 72),
            warning: Color::Rgb(217, 119, 6),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Toggling twice is the identity.
    fn test_toggle_is_an_involution() {
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Palette::dark(), Palette::light());
    }
}
