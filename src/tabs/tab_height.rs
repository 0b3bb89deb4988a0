//! Tab strip height from the themed header font.

use tracing::debug;

use super::providers::{LabelFont, SettingsProvider, TextMeasurer, ThemeProvider};

/// Label measured to size the strip; its glyphs have no descenders, so the
/// height is the font's line height.
const FAKE_LABEL_TEXT: &str = "XXX";

/// Default vertical padding above and below tab labels, in logical pixels.
pub const BASE_TAB_VERTICAL_PADDING: u32 = 2;

/// Scales a base logical pixel value by the UI scale factor.
///
/// Zero stays zero; anything else rounds to at least one physical pixel.
pub fn scaled_px(base: u32, ui_scale: f64) -> u32 {
    if base == 0 {
        0
    } else {
        ((base as f64 * ui_scale).round() as u32).max(1)
    }
}

/// Default vertical padding as an unrounded float, for callers laying out
/// in fractional pixels.
pub fn tab_vertical_padding(ui_scale: f64) -> f32 {
    (BASE_TAB_VERTICAL_PADDING as f64 * ui_scale) as f32
}

/// Resolves the font used for tab labels.
///
/// With font overriding on, the header font is re-derived at the user's
/// configured size plus the theme's header offset.
pub fn label_font(settings: &impl SettingsProvider, theme: &impl ThemeProvider) -> LabelFont {
    let font = theme.header_font();
    if settings.override_fonts_enabled() {
        let size = settings.configured_font_size() + theme.header_font_size_offset();
        debug!(base = font.size, derived = size, "deriving overridden tab label font");
        return font.with_size(size);
    }
    font
}

/// Computes tab strip heights.
///
/// The default padding is scaled once on construction; every call re-reads
/// fonts and settings from the providers.
#[derive(Debug, Clone)]
pub struct TabHeightCalculator<S, T, M> {
    settings: S,
    theme: T,
    measurer: M,
    default_padding: u32,
}

impl<S, T, M> TabHeightCalculator<S, T, M>
where
    S: SettingsProvider,
    T: ThemeProvider,
    M: TextMeasurer,
{
    pub fn new(settings: S, theme: T, measurer: M, ui_scale: f64) -> Self {
        Self {
            settings,
            theme,
            measurer,
            default_padding: scaled_px(BASE_TAB_VERTICAL_PADDING, ui_scale),
        }
    }

    /// The scaled default padding used by [`Self::default_height`].
    pub fn default_padding(&self) -> u32 {
        self.default_padding
    }

    pub fn default_height(&self) -> u32 {
        self.height(self.default_padding)
    }

    /// Label height plus `vertical_padding` on both sides, saturating at
    /// `u32::MAX`.
    pub fn height(&self, vertical_padding: u32) -> u32 {
        let font = self.label_font();
        self.measurer
            .preferred_height(FAKE_LABEL_TEXT, &font)
            .saturating_add(vertical_padding.saturating_mul(2))
    }

    pub fn label_font(&self) -> LabelFont {
        label_font(&self.settings, &self.theme)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tabs_tab_height.rs"]
mod tests;
