//! Points and rectangles in grid coordinates
//!
//! Coordinates are signed so that callers can describe rectangles that hang
//! off the edge of a grid; the grid clamps them before touching any cell.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Square of the euclidean distance
    pub fn distance2(&self, other: &Point) -> u64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        (dx * dx + dy * dy) as u64
    }

    /// Chessboard distance
    pub fn chebyshev(&self, other: &Point) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A half-open rectangle: `lower` is inside, `upper` is one past the last cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub lower: Point,
    pub upper: Point,
}

impl Rect {
    /// Build a rectangle from two arbitrary corners, ordering them per axis
    pub fn from_corners(a: impl Into<Point>, b: impl Into<Point>) -> Self {
        let a = a.into();
        let b = b.into();
        Self {
            lower: Point::new(a.x.min(b.x), a.y.min(b.y)),
            upper: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Single-cell rectangle at a point
    pub fn cell(p: impl Into<Point>) -> Self {
        let p = p.into();
        Self {
            lower: p,
            upper: Point::new(p.x.saturating_add(1), p.y.saturating_add(1)),
        }
    }

    pub fn width(&self) -> u32 {
        self.upper.x.saturating_sub(self.lower.x).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        self.upper.y.saturating_sub(self.lower.y).max(0) as u32
    }

    /// Number of cells covered
    pub fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.lower.x && p.x < self.upper.x && p.y >= self.lower.y && p.y < self.upper.y
    }

    /// Intersect with `[0, width) x [0, height)`
    ///
    /// Returns `None` when nothing of the rectangle lies on the grid.
    pub fn clamp_to(&self, width: usize, height: usize) -> Option<Rect> {
        let max_x = i32::try_from(width).unwrap_or(i32::MAX);
        let max_y = i32::try_from(height).unwrap_or(i32::MAX);
        let clamped = Rect {
            lower: Point::new(self.lower.x.max(0), self.lower.y.max(0)),
            upper: Point::new(self.upper.x.min(max_x), self.upper.y.min(max_y)),
        };
        (!clamped.is_empty()).then_some(clamped)
    }

    /// Every point inside the rectangle, column by column
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let (lower, upper) = (self.lower, self.upper);
        (lower.x..upper.x).flat_map(move |x| (lower.y..upper.y).map(move |y| Point::new(x, y)))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.lower, self.upper)
    }
}
