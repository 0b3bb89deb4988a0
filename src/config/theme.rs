use serde::{Deserialize, Serialize};

use crate::tabs::{FontFamily, FontStyle, LabelFont, ThemeProvider};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

/// Tool-window header values resolved from a [`ThemeChoice`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderTheme {
    pub header_font: LabelFont,
    /// Added to the user's font size when fonts are overridden.
    pub header_font_size_offset: f32,
}

impl ThemeChoice {
    pub fn resolve(&self) -> HeaderTheme {
        match self {
            ThemeChoice::Dark => HeaderTheme::dark(),
            ThemeChoice::Light => HeaderTheme::light(),
        }
    }
}

impl HeaderTheme {
    fn dark() -> Self {
        Self {
            header_font: LabelFont::new(FontFamily::SystemUi, FontStyle::Regular, 12.0),
            header_font_size_offset: -1.0,
        }
    }

    fn light() -> Self {
        Self {
            header_font: LabelFont::new(FontFamily::SystemUi, FontStyle::Bold, 12.0),
            header_font_size_offset: 0.0,
        }
    }
}

impl ThemeProvider for HeaderTheme {
    fn header_font(&self) -> LabelFont {
        self.header_font
    }

    fn header_font_size_offset(&self) -> f32 {
        self.header_font_size_offset
    }
}
