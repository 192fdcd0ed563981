//! Light and dark colour palettes.

use derive_more::Display;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Which palette is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    /// Pale background, dark text.
    #[default]
    #[display("light")]
    Light,
    /// Dark background, pale text.
    #[display("dark")]
    Dark,
}

impl ThemeKind {
    /// The other theme.
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Colours for this theme.
    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette {
                bg: Color::Rgb(0xf7, 0xfa, 0xfc),
                fg: Color::Rgb(0x22, 0x22, 0x3b),
                button: Color::Rgb(0xe0, 0xe1, 0xdd),
                active: Color::Rgb(0xa9, 0xde, 0xf9),
                win: Color::Rgb(0xb5, 0xea, 0xd7),
                border: Color::Rgb(0xa3, 0xce, 0xf1),
            },
            Self::Dark => Palette {
                bg: Color::Rgb(0x22, 0x22, 0x3b),
                fg: Color::Rgb(0xf7, 0xfa, 0xfc),
                button: Color::Rgb(0x39, 0x3e, 0x46),
                active: Color::Rgb(0x00, 0xad, 0xb5),
                win: Color::Rgb(0x00, 0xb8, 0x94),
                border: Color::Rgb(0x00, 0xad, 0xb5),
            },
        }
    }
}

/// Resolved colours for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub bg: Color,
    /// Text.
    pub fg: Color,
    /// Cell and button fill.
    pub button: Color,
    /// Cursor and selection fill.
    pub active: Color,
    /// Winning line fill.
    pub win: Color,
    /// Block borders.
    pub border: Color,
}
