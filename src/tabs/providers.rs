//! Collaborator interfaces supplied by the host UI.
//!
//! The calculations in this crate never reach for global state; every
//! setting, theme value and text measurement comes through one of these
//! traits. [`crate::config::AppConfig`] and [`crate::config::HeaderTheme`]
//! implement them from the on-disk config; tests use small fakes.

use serde::{Deserialize, Serialize};

/// Side of the container occupied by the tab strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TabPlacement {
    #[default]
    Top,
    Left,
    Bottom,
    Right,
}

/// Font families the host can hand out for tab labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FontFamily {
    #[default]
    SystemUi,
    JetBrainsMono,
    FiraCode,
}

/// Weight/slant of a label font.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
    Italic,
}

/// A font description: family, style and point size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelFont {
    pub family: FontFamily,
    pub style: FontStyle,
    pub size: f32,
}

impl LabelFont {
    pub fn new(family: FontFamily, style: FontStyle, size: f32) -> Self {
        Self {
            family,
            style,
            size,
        }
    }

    /// Same family and style at a different size.
    pub fn with_size(self, size: f32) -> Self {
        Self { size, ..self }
    }
}

/// User-facing UI settings.
pub trait SettingsProvider {
    fn current_tab_placement(&self) -> TabPlacement;
    fn override_fonts_enabled(&self) -> bool;
    fn configured_font_size(&self) -> f32;
}

/// Theme lookups for tool-window headers.
pub trait ThemeProvider {
    fn header_font(&self) -> LabelFont;
    fn header_font_size_offset(&self) -> f32;
}

/// Text measurement backed by a real font rasterizer.
pub trait TextMeasurer {
    /// Preferred rendering height of `text` in `font`, in pixels.
    fn preferred_height(&self, text: &str, font: &LabelFont) -> u32;
}

/// Advanced, rarely-changed tuning values.
pub trait RegistryProvider {
    /// Raw drag-to-split ratio; callers clamp it.
    fn drag_to_split_ratio(&self) -> f64;
}

impl<T: SettingsProvider + ?Sized> SettingsProvider for &T {
    fn current_tab_placement(&self) -> TabPlacement {
        (**self).current_tab_placement()
    }

    fn override_fonts_enabled(&self) -> bool {
        (**self).override_fonts_enabled()
    }

    fn configured_font_size(&self) -> f32 {
        (**self).configured_font_size()
    }
}

impl<T: ThemeProvider + ?Sized> ThemeProvider for &T {
    fn header_font(&self) -> LabelFont {
        (**self).header_font()
    }

    fn header_font_size_offset(&self) -> f32 {
        (**self).header_font_size_offset()
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn preferred_height(&self, text: &str, font: &LabelFont) -> u32 {
        (**self).preferred_height(text, font)
    }
}

impl<T: RegistryProvider + ?Sized> RegistryProvider for &T {
    fn drag_to_split_ratio(&self) -> f64 {
        (**self).drag_to_split_ratio()
    }
}
