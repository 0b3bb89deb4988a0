//! Layout geometry for tabbed panes.
//!
//! Two stateless calculations live here: how tall a tab strip is for the
//! current header font, and which side of a pane a dragged tab would split
//! when released at a given point. Everything the host UI knows (fonts,
//! theme, settings) is injected through the traits in [`tabs::providers`].

pub mod config;
pub mod tabs;

pub use config::{AppConfig, HeaderTheme, ThemeChoice};
pub use tabs::{
    DropSide, DropZoneClassifier, FontdueMeasurer, LabelFont, Point, Quad, Rect,
    RegistryProvider, SettingsProvider, Size, SplitDirection, TabHeightCalculator, TabPlacement,
    TextMeasurer, ThemeProvider,
};
