use serde::{Deserialize, Serialize};
use tracing::warn;

use super::ThemeChoice;
use crate::tabs::{RegistryProvider, SettingsProvider, TabPlacement};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub registry: RegistryConfig,
    pub theme: ThemeChoice,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub tab_placement: TabPlacement,
    /// Replace the theme's header font size with `font_size` + offset.
    pub override_fonts: bool,
    pub font_size: f32,
    pub ui_scale: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tab_placement: TabPlacement::Top,
            override_fonts: false,
            font_size: 13.0,
            ui_scale: 1.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Raw value; clamped by the drop-zone classifier on every read.
    pub drag_to_split_ratio: f64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            drag_to_split_ratio: 0.25,
        }
    }
}

impl AppConfig {
    /// Replaces values no font or layout could use with their defaults.
    ///
    /// The drag ratio is left alone; it is clamped where it is consumed.
    pub fn sanitized(mut self) -> Self {
        let defaults = UiConfig::default();
        if !self.ui.font_size.is_finite() || self.ui.font_size <= 0.0 {
            warn!(font_size = self.ui.font_size, "ignoring invalid font size");
            self.ui.font_size = defaults.font_size;
        }
        if !self.ui.ui_scale.is_finite() || self.ui.ui_scale <= 0.0 {
            warn!(ui_scale = self.ui.ui_scale, "ignoring invalid ui scale");
            self.ui.ui_scale = defaults.ui_scale;
        }
        self
    }
}

impl SettingsProvider for AppConfig {
    fn current_tab_placement(&self) -> TabPlacement {
        self.ui.tab_placement
    }

    fn override_fonts_enabled(&self) -> bool {
        self.ui.override_fonts
    }

    fn configured_font_size(&self) -> f32 {
        self.ui.font_size
    }
}

impl RegistryProvider for AppConfig {
    fn drag_to_split_ratio(&self) -> f64 {
        self.registry.drag_to_split_ratio
    }
}
