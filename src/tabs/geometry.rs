//! Shared geometry for drop-zone hit testing.
//!
//! All containment here is closed: a point exactly on an edge or vertex is
//! inside. Coordinates are component-local and unit-free.

/// Tolerance for "on the boundary" checks, in coordinate units.
const BOUNDARY_EPSILON: f64 = 1e-9;

/// A point in component-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self {
            x: x as f64,
            y: y as f64,
        }
    }
}

/// Size of the component under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Creates a size, clamping negative dimensions to zero.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// The rectangle `[0, width] x [0, height]`.
    pub fn bounds(self) -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            w: self.width,
            h: self.height,
        }
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width as f64, height as f64)
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}

/// An axis-aligned rectangle defined by origin + size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    /// Returns `true` when `p` lies inside or on the border of this rectangle.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }
}

/// A closed quadrilateral given by its four vertices in path order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub vertices: [Point; 4],
}

impl Quad {
    pub const fn new(a: Point, b: Point, c: Point, d: Point) -> Self {
        Self {
            vertices: [a, b, c, d],
        }
    }

    /// Iterates the four closing edges `(start, end)`.
    fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        (0..4).map(move |i| (self.vertices[i], self.vertices[(i + 1) % 4]))
    }

    /// Signed shoelace area; positive for counter-clockwise vertex order in
    /// a y-up frame.
    pub fn signed_area(&self) -> f64 {
        self.edges().map(|(a, b)| a.x * b.y - b.x * a.y).sum::<f64>() / 2.0
    }

    /// Returns `true` when `p` lies inside or on the boundary of the quad.
    ///
    /// A quad with zero area contains nothing, so wedges collapsed by a
    /// zero-sized component never claim a point.
    pub fn contains(&self, p: Point) -> bool {
        if self.signed_area() == 0.0 {
            return false;
        }
        if self
            .edges()
            .any(|(a, b)| point_to_segment_distance(p, a, b) <= BOUNDARY_EPSILON)
        {
            return true;
        }

        // Even-odd crossing test for the interior.
        let mut inside = false;
        for (a, b) in self.edges() {
            if (a.y > p.y) != (b.y > p.y) {
                let x_at_y = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if p.x < x_at_y {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

/// Euclidean distance from `p` to the segment `a..b`.
fn point_to_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let vx = b.x - a.x;
    let vy = b.y - a.y;
    let len_sq = vx * vx + vy * vy;
    if len_sq <= f64::EPSILON {
        return ((p.x - a.x).powi(2) + (p.y - a.y).powi(2)).sqrt();
    }

    let t = (((p.x - a.x) * vx + (p.y - a.y) * vy) / len_sq).clamp(0.0, 1.0);
    let proj_x = a.x + t * vx;
    let proj_y = a.y + t * vy;
    ((p.x - proj_x).powi(2) + (p.y - proj_y).powi(2)).sqrt()
}
