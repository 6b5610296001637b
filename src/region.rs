use nalgebra::point;

use crate::{shapes::Rect, P2};

/// Why the partitioner stopped subdividing a region
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stop {
    /// At least one quadrant held fewer points than the minimum population
    Threshold,
    /// The range held no points at all
    Empty,
    /// The recursion depth bound was reached
    DepthLimit,
}

/// A terminal bin of the adaptive partition: an axis-aligned rectangle and a scalar
/// content.
///
/// The partitioner sets the content to the number of points assigned to the region.
/// Callers are free to overwrite it afterwards, e.g. with a normalized residual.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    rect: Rect,
    content: f64,
    stop: Stop,
    depth: usize,
}

impl Region {
    /// Create a new top-level region covering `rect`
    pub fn new(rect: Rect, content: f64, stop: Stop) -> Self {
        Self::at_depth(rect, content, stop, 0)
    }

    /// Create a new region produced after `depth` splits
    pub fn at_depth(rect: Rect, content: f64, stop: Stop, depth: usize) -> Self {
        Self {
            rect,
            content,
            stop,
            depth,
        }
    }

    /// Get the rect covered by the region
    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    /// Get the lower x edge
    pub fn xlo(&self) -> f64 {
        self.rect.xlo()
    }

    /// Get the upper x edge
    pub fn xhi(&self) -> f64 {
        self.rect.xhi()
    }

    /// Get the lower y edge
    pub fn ylo(&self) -> f64 {
        self.rect.ylo()
    }

    /// Get the upper y edge
    pub fn yhi(&self) -> f64 {
        self.rect.yhi()
    }

    /// Get the content: the point count unless a caller replaced it
    pub fn content(&self) -> f64 {
        self.content
    }

    /// Replace the content, e.g. with a derived statistic
    pub fn set_content(&mut self, content: f64) {
        self.content = content;
    }

    /// Get the reason the region was not split further
    pub fn stop(&self) -> Stop {
        self.stop
    }

    /// Get the number of splits between the bounds and this region
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Get the area of the region
    pub fn area(&self) -> f64 {
        self.rect.area()
    }

    /// Check if a point exists within the region, edges included
    pub fn contains(&self, point: &P2) -> bool {
        self.rect.contains(point)
    }

    /// Closed polygon tracing the region boundary, starting and ending at the
    /// lower-left corner and going up the left edge first
    pub fn outline(&self) -> [P2; 5] {
        let (xlo, xhi, ylo, yhi) = (self.xlo(), self.xhi(), self.ylo(), self.yhi());
        [
            point![xlo, ylo],
            point![xlo, yhi],
            point![xhi, yhi],
            point![xhi, ylo],
            point![xlo, ylo],
        ]
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::point;

    use crate::util::tests::make_rect;

    use super::*;

    #[test]
    fn region_edges_follow_rect() {
        let region = Region::new(make_rect(1.0, 2.0, 3.0, 5.0), 7.0, Stop::Threshold);
        assert_eq!(
            (region.xlo(), region.xhi(), region.ylo(), region.yhi()),
            (1.0, 3.0, 2.0, 5.0)
        );
        assert_eq!(region.content(), 7.0);
        assert_eq!(region.area(), 6.0);
        assert!(region.contains(&point![3.0, 5.0]));
        assert!(!region.contains(&point![3.5, 5.0]));
    }

    #[test]
    fn overwrite_content() {
        let mut region = Region::new(make_rect(0.0, 0.0, 1.0, 1.0), 12.0, Stop::Threshold);
        region.set_content(-1.5);
        assert_eq!(region.content(), -1.5, "Content should be caller-writable");
        assert_eq!(
            region.rect(),
            &make_rect(0.0, 0.0, 1.0, 1.0),
            "Overwriting content should leave the extent alone"
        );
    }

    #[test]
    fn outline_is_closed() {
        let region = Region::new(make_rect(0.0, 0.0, 2.0, 1.0), 0.0, Stop::Empty);
        let outline = region.outline();
        assert_eq!(outline[0], outline[4], "Outline should close on itself");
        assert_eq!(
            outline[..4],
            [
                point![0.0, 0.0],
                point![0.0, 1.0],
                point![2.0, 1.0],
                point![2.0, 0.0]
            ]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let region = Region::at_depth(make_rect(-1.0, 0.5, 2.0, 3.0), 4.0, Stop::DepthLimit, 3);
        let json = serde_json::to_string(&region).unwrap();
        let back: Region = serde_json::from_str(&json).unwrap();
        assert_eq!(back, region);
    }
}
