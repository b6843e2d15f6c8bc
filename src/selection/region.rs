//! Selection values and their containment predicates.
//!
//! Spans and rectangles are inclusive on both ends. Polygons use the
//! even-odd rule: a horizontal ray cast to the right counts crossings with
//! every edge whose y-range satisfies `min < y <= max`. Excluding the lower
//! end keeps a ray through a shared vertex from being counted twice and
//! drops horizontal edges entirely.

use crate::constants::LINE_HIT_TOLERANCE;
use crate::geometry::{Bounds, Point};
use serde::{Deserialize, Serialize};

/// A region of the canvas that can test point membership.
pub trait Region {
    fn contains(&self, p: Point) -> bool;

    /// Envelope of the region, `None` when it contains nothing.
    fn bounds(&self) -> Option<Bounds>;

    /// Accepts a `Point`, an `(x, y)` tuple or an `[x, y]` array.
    fn contains_point(&self, p: impl Into<Point>) -> bool
    where
        Self: Sized,
    {
        self.contains(p.into())
    }

    fn contains_xy(&self, x: f64, y: f64) -> bool {
        self.contains(Point::new(x, y))
    }

    /// Vectorized form of `contains`, one flag per input point.
    fn contains_points<I, P>(&self, points: I) -> Vec<bool>
    where
        Self: Sized,
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        points.into_iter().map(|p| self.contains(p.into())).collect()
    }
}

// ============================================================================
// Line
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSelection {
    pub start: Point,
    pub end: Point,
}

impl LineSelection {
    pub fn new(start: impl Into<Point>, end: impl Into<Point>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Shortest distance from `p` to the segment
    pub fn distance_to(&self, p: Point) -> f64 {
        let (dx, dy) = (self.end.x - self.start.x, self.end.y - self.start.y);
        let len_sq = dx * dx + dy * dy;
        if len_sq == 0.0 {
            return self.start.distance(p);
        }
        let t = (((p.x - self.start.x) * dx + (p.y - self.start.y) * dy) / len_sq).clamp(0.0, 1.0);
        p.distance(Point::new(self.start.x + t * dx, self.start.y + t * dy))
    }
}

impl Region for LineSelection {
    fn contains(&self, p: Point) -> bool {
        self.distance_to(p) <= LINE_HIT_TOLERANCE
    }

    fn bounds(&self) -> Option<Bounds> {
        Some(Bounds::from_corners(self.start, self.end))
    }
}

impl From<LineSelection> for (Point, Point) {
    fn from(sel: LineSelection) -> Self {
        (sel.start, sel.end)
    }
}

// ============================================================================
// Spans
// ============================================================================

/// Interval along the x axis; y is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XSpanSelection {
    pub start: f64,
    pub end: f64,
}

/// Interval along the y axis; x is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YSpanSelection {
    pub start: f64,
    pub end: f64,
}

macro_rules! span_impl {
    ($ty:ident, $axis:ident, $bounds:expr) => {
        impl $ty {
            /// Build a span; the endpoints are stored sorted.
            pub fn new(a: f64, b: f64) -> Self {
                Self {
                    start: a.min(b),
                    end: a.max(b),
                }
            }

            pub fn width(&self) -> f64 {
                self.end - self.start
            }

            pub fn contains_value(&self, v: f64) -> bool {
                self.start <= v && v <= self.end
            }
        }

        impl Region for $ty {
            fn contains(&self, p: Point) -> bool {
                self.contains_value(p.$axis)
            }

            fn bounds(&self) -> Option<Bounds> {
                Some(($bounds)(self))
            }
        }

        impl From<$ty> for (f64, f64) {
            fn from(span: $ty) -> Self {
                (span.start, span.end)
            }
        }
    };
}

span_impl!(XSpanSelection, x, |s: &XSpanSelection| Bounds::from_corners(
    Point::new(s.start, f64::MIN),
    Point::new(s.end, f64::MAX)
));
span_impl!(YSpanSelection, y, |s: &YSpanSelection| Bounds::from_corners(
    Point::new(f64::MIN, s.start),
    Point::new(f64::MAX, s.end)
));

// ============================================================================
// Rectangle
// ============================================================================

/// Axis-aligned box with `left <= right` and `bottom <= top`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectSelection {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl RectSelection {
    /// Build from bounds given in any order; they are sorted.
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left: left.min(right),
            right: left.max(right),
            bottom: bottom.min(top),
            top: bottom.max(top),
        }
    }

    pub fn from_corners(a: impl Into<Point>, b: impl Into<Point>) -> Self {
        let (a, b) = (a.into(), b.into());
        Self::new(a.x, b.x, a.y, b.y)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.bottom + self.top) / 2.0,
        )
    }
}

impl Region for RectSelection {
    fn contains(&self, p: Point) -> bool {
        self.left <= p.x && p.x <= self.right && self.bottom <= p.y && p.y <= self.top
    }

    fn bounds(&self) -> Option<Bounds> {
        Some(Bounds {
            min: Point::new(self.left, self.bottom),
            max: Point::new(self.right, self.top),
        })
    }
}

// ============================================================================
// Polygon (lasso)
// ============================================================================

/// Closed polygon; the edge from the last vertex back to the first is
/// implicit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PolygonSelection {
    pub vertices: Vec<Point>,
}

impl PolygonSelection {
    pub fn new<I, P>(vertices: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        Self {
            vertices: vertices.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Enclosed area (shoelace formula, absolute value)
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f64 = (0..n)
            .map(|i| {
                let (a, b) = (self.vertices[i], self.vertices[(i + 1) % n]);
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice.abs() / 2.0
    }
}

impl Region for PolygonSelection {
    fn contains(&self, p: Point) -> bool {
        let v = &self.vertices;
        if v.len() < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = v.len() - 1;
        for i in 0..v.len() {
            let (a, b) = (v[j], v[i]);
            if a.y.min(b.y) < p.y && p.y <= a.y.max(b.y) {
                // a.y != b.y here, so the division is safe
                let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    fn bounds(&self) -> Option<Bounds> {
        if self.vertices.len() < 3 {
            return None;
        }
        Bounds::enclosing(self.vertices.iter().copied())
    }
}
