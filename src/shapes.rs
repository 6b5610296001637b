use nalgebra::{self as na, point, vector};

use crate::{Quadrant, P2};

/// Represents an axis-aligned rectangle defined by two points: the start (lower-left
/// corner) and the end (upper-right corner). It is used both for the bounding box of a
/// binning request and for the extent of every produced region.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    start: P2,
    end: P2,
}

impl Rect {
    /// Create a new rect with a start and end point
    pub fn new(start: P2, end: P2) -> Self {
        Self { start, end }
    }

    /// Create a new rect from its edges, in the `xlo, xhi, ylo, yhi` order the
    /// binning API uses throughout
    pub fn from_bounds(xlo: f64, xhi: f64, ylo: f64, yhi: f64) -> Self {
        Self::new(point![xlo, ylo], point![xhi, yhi])
    }

    /// Get the start point of the rect
    pub fn start(&self) -> P2 {
        self.start
    }

    /// Get the end point of the rect
    pub fn end(&self) -> P2 {
        self.end
    }

    /// Get the geometric center of the rect
    pub fn center(&self) -> P2 {
        na::center(&self.start, &self.end)
    }

    /// Get the lower x edge
    pub fn xlo(&self) -> f64 {
        self.start.x
    }

    /// Get the upper x edge
    pub fn xhi(&self) -> f64 {
        self.end.x
    }

    /// Get the lower y edge
    pub fn ylo(&self) -> f64 {
        self.start.y
    }

    /// Get the upper y edge
    pub fn yhi(&self) -> f64 {
        self.end.y
    }

    /// Get the extent along x
    pub fn width(&self) -> f64 {
        self.end.x - self.start.x
    }

    /// Get the extent along y
    pub fn height(&self) -> f64 {
        self.end.y - self.start.y
    }

    /// Get the area of the rect
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Check that every edge is a finite number
    pub fn is_finite(&self) -> bool {
        self.start
            .coords
            .iter()
            .chain(self.end.coords.iter())
            .all(|v| v.is_finite())
    }

    /// Check that the start corner is not above or right of the end corner
    pub fn is_ordered(&self) -> bool {
        self.start.x <= self.end.x && self.start.y <= self.end.y
    }

    /// Check if a point exists within the rect, edges included
    pub fn contains(&self, point: &P2) -> bool {
        point.x >= self.start.x
            && point.x <= self.end.x
            && point.y >= self.start.y
            && point.y <= self.end.y
    }

    /// Check if the interiors of two rects overlap. Rects that only share an
    /// edge or a corner do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.start.x < other.end.x
            && other.start.x < self.end.x
            && self.start.y < other.end.y
            && other.start.y < self.end.y
    }

    /// Move a point onto the nearest position inside the rect
    pub fn clamp(&self, point: &P2) -> P2 {
        point![
            point.x.clamp(self.start.x, self.end.x),
            point.y.clamp(self.start.y, self.end.y)
        ]
    }

    /// Grow the rect by `margin` on every side
    pub fn expand(&self, margin: f64) -> Self {
        let v = vector![margin, margin];
        Self::new(self.start - v, self.end + v)
    }

    /// The part of the rect lying in `quadrant` relative to `pivot`
    pub fn quadrant_rect(&self, quadrant: Quadrant, pivot: &P2) -> Self {
        let &Rect { start, end } = self;
        match quadrant {
            Quadrant::BottomLeft => Rect::new(start, *pivot),
            Quadrant::TopLeft => Rect::new(point![start.x, pivot.y], point![pivot.x, end.y]),
            Quadrant::BottomRight => Rect::new(point![pivot.x, start.y], point![end.x, pivot.y]),
            Quadrant::TopRight => Rect::new(*pivot, end),
        }
    }

    /// Split the rect at `pivot` into four smaller rects, indexed by quadrant code.
    /// The pivot must lie inside the rect for the pieces to tile it.
    pub fn split_at(&self, pivot: &P2) -> [Self; 4] {
        Quadrant::ALL.map(|q| self.quadrant_rect(q, pivot))
    }
}
