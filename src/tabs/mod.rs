//! Tab strip sizing and drag-to-split drop zones.
//!
//! The modules below are pure calculations over injected collaborators:
//! given sizes, points and provider lookups they return heights, sides and
//! rectangles. No rendering, no event handling.

pub mod drop_zone;
pub mod geometry;
pub mod measure;
pub mod providers;
pub mod tab_height;

pub use drop_zone::{
    DropSide, DropZoneClassifier, MAX_DRAG_RATIO, MIN_DRAG_RATIO, SplitDirection, classify,
    clamp_drag_ratio, drop_preview_rect, wedges,
};
pub use geometry::{Point, Quad, Rect, Size};
pub use measure::FontdueMeasurer;
pub use providers::{
    FontFamily, FontStyle, LabelFont, RegistryProvider, SettingsProvider, TabPlacement, TextMeasurer,
    ThemeProvider,
};
pub use tab_height::{
    BASE_TAB_VERTICAL_PADDING, TabHeightCalculator, label_font, scaled_px, tab_vertical_padding,
};
