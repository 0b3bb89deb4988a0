//! Drag-to-split drop zones.
//!
//! A component is carved into four trapezoidal wedges, one hugging each
//! edge, plus whatever is left in the middle. Releasing a dragged tab in a
//! wedge splits the pane on that side; releasing it in the middle merges it
//! into the existing tab strip. The side already holding the tab strip is
//! never offered as a split target.
//!
//! Wedge depth is the drag-to-split ratio `r`, a fraction of the
//! perpendicular dimension:
//!
//! ```text
//! (0,0) +-------------------------+ (w,0)
//!       |\         TOP           /|
//!       | +---------------------+ |
//!       |L|                     |R|
//!       | |       CENTER        | |
//!       | +---------------------+ |
//!       |/        BOTTOM         \|
//! (0,h) +-------------------------+ (w,h)
//! ```

use tracing::trace;

use super::geometry::{Point, Quad, Rect, Size};
use super::providers::{RegistryProvider, SettingsProvider, TabPlacement};

/// Smallest wedge depth, as a fraction of the component.
pub const MIN_DRAG_RATIO: f64 = 0.05;

/// Largest wedge depth; keeps opposite wedges from meeting.
pub const MAX_DRAG_RATIO: f64 = 0.45;

/// Where a dragged tab would land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropSide {
    Top,
    Left,
    Bottom,
    Right,
    /// Inside the component but in no active wedge.
    Center,
}

/// Direction in which a drop splits the target pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitDirection {
    /// Left | Right
    Horizontal,
    /// Top / Bottom
    Vertical,
}

impl DropSide {
    /// The split a drop on this side creates; `None` for [`DropSide::Center`].
    pub fn split_direction(self) -> Option<SplitDirection> {
        match self {
            DropSide::Left | DropSide::Right => Some(SplitDirection::Horizontal),
            DropSide::Top | DropSide::Bottom => Some(SplitDirection::Vertical),
            DropSide::Center => None,
        }
    }

    /// Whether the dropped content goes before the existing content.
    pub fn is_before(self) -> bool {
        matches!(self, DropSide::Left | DropSide::Top)
    }
}

impl From<TabPlacement> for DropSide {
    fn from(placement: TabPlacement) -> Self {
        match placement {
            TabPlacement::Top => DropSide::Top,
            TabPlacement::Left => DropSide::Left,
            TabPlacement::Bottom => DropSide::Bottom,
            TabPlacement::Right => DropSide::Right,
        }
    }
}

/// Clamps a raw configured ratio into `[MIN_DRAG_RATIO, MAX_DRAG_RATIO]`.
///
/// NaN maps to the maximum.
pub fn clamp_drag_ratio(raw: f64) -> f64 {
    MIN_DRAG_RATIO.max(MAX_DRAG_RATIO.min(raw))
}

/// The four edge wedges in hit-test order: right, left, bottom, top.
///
/// Adjacent wedges share their diagonal edge, so a point on a corner
/// diagonal belongs to both; the order decides who wins.
pub fn wedges(size: Size, ratio: f64) -> [(DropSide, Quad); 4] {
    let (w, h, r) = (size.width, size.height, ratio);
    let near_x = w * r;
    let far_x = w * (1.0 - r);
    let near_y = h * r;
    let far_y = h * (1.0 - r);

    let top = Quad::new(
        Point::new(0.0, 0.0),
        Point::new(w, 0.0),
        Point::new(far_x, near_y),
        Point::new(near_x, near_y),
    );
    let left = Quad::new(
        Point::new(0.0, 0.0),
        Point::new(near_x, near_y),
        Point::new(near_x, far_y),
        Point::new(0.0, h),
    );
    let bottom = Quad::new(
        Point::new(0.0, h),
        Point::new(near_x, far_y),
        Point::new(far_x, far_y),
        Point::new(w, h),
    );
    let right = Quad::new(
        Point::new(w, 0.0),
        Point::new(far_x, near_y),
        Point::new(far_x, far_y),
        Point::new(w, h),
    );

    [
        (DropSide::Right, right),
        (DropSide::Left, left),
        (DropSide::Bottom, bottom),
        (DropSide::Top, top),
    ]
}

/// Classifies `point` against a component of `size`.
///
/// `ratio` is used as given; clamp it with [`clamp_drag_ratio`] first.
/// Returns `None` when the point lies outside the component.
pub fn classify(point: Point, size: Size, ratio: f64, placement: TabPlacement) -> Option<DropSide> {
    if !size.bounds().contains(point) {
        return None;
    }
    let excluded = DropSide::from(placement);
    let hit = wedges(size, ratio)
        .into_iter()
        .find(|(side, quad)| *side != excluded && quad.contains(point))
        .map(|(side, _)| side);

    Some(hit.unwrap_or(DropSide::Center))
}

/// The part of a component a drop on `side` would occupy, for the drop
/// highlight: the matching half for edges, everything for center.
pub fn drop_preview_rect(side: DropSide, size: Size) -> Rect {
    let (w, h) = (size.width, size.height);
    match side {
        DropSide::Top => Rect { x: 0.0, y: 0.0, w, h: h / 2.0 },
        DropSide::Bottom => Rect { x: 0.0, y: h / 2.0, w, h: h / 2.0 },
        DropSide::Left => Rect { x: 0.0, y: 0.0, w: w / 2.0, h },
        DropSide::Right => Rect { x: w / 2.0, y: 0.0, w: w / 2.0, h },
        DropSide::Center => size.bounds(),
    }
}

/// Resolves drop sides from live settings.
///
/// The ratio and tab placement are read on every call, so changing them in
/// the host takes effect on the next drag-move.
#[derive(Debug, Clone)]
pub struct DropZoneClassifier<S, R> {
    settings: S,
    registry: R,
}

impl<S, R> DropZoneClassifier<S, R>
where
    S: SettingsProvider,
    R: RegistryProvider,
{
    pub fn new(settings: S, registry: R) -> Self {
        Self { settings, registry }
    }

    /// The clamped ratio currently in effect.
    pub fn ratio(&self) -> f64 {
        clamp_drag_ratio(self.registry.drag_to_split_ratio())
    }

    pub fn drop_side_for(&self, point: impl Into<Point>, size: impl Into<Size>) -> Option<DropSide> {
        let (point, size) = (point.into(), size.into());
        let ratio = self.ratio();
        let placement = self.settings.current_tab_placement();
        let side = classify(point, size, ratio, placement);
        trace!(?point, ?size, ratio, ?placement, ?side, "drop side");
        side
    }

    /// Wedges for `size` at the current ratio, in hit-test order, with the
    /// placement side filtered out.
    pub fn active_wedges(&self, size: impl Into<Size>) -> Vec<(DropSide, Quad)> {
        let excluded = DropSide::from(self.settings.current_tab_placement());
        wedges(size.into(), self.ratio())
            .into_iter()
            .filter(|(side, _)| *side != excluded)
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tabs_drop_zone.rs"]
mod tests;
