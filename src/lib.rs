//! Adaptive two-dimensional binning.
//!
//! Scattered 2d samples are partitioned into axis-aligned rectangular regions by
//! recursively splitting at the centroid of the points. A range is split into its four
//! centroid quadrants only while every quadrant holds at least a minimum population;
//! otherwise the whole rectangle becomes one terminal region. The regions always tile
//! the requested bounds exactly.
//!
//! ```
//! use quadbin::{Dataset, Rect};
//!
//! let mut data = Dataset::new();
//! for &(x, y) in &[(0.0, 0.0), (1.0, 1.0), (-1.0, 1.0), (1.0, -1.0)] {
//!     for _ in 0..3 {
//!         data.add(x, y);
//!     }
//! }
//!
//! let regions = data
//!     .adaptive_bins(Rect::from_bounds(-2.0, 2.0, -2.0, 2.0), 3)
//!     .unwrap();
//! assert_eq!(regions.len(), 4);
//! assert!(regions.iter().all(|r| r.content() == 3.0));
//! ```

use nalgebra::{point, Point2};

pub mod binning;
pub mod dataset;
pub mod error;
pub mod kinematics;
pub mod partition;
pub mod quadrant;
pub mod region;
pub mod shapes;
mod util;

pub use binning::{Binning, DEFAULT_MAX_DEPTH, DEFAULT_MIN_POPULATION};
pub use dataset::Dataset;
pub use error::{Error, Result};
pub use partition::partition;
pub use quadrant::Quadrant;
pub use region::{Region, Stop};
pub use shapes::Rect;

/// 2d point type used throughout the crate
pub type P2 = Point2<f64>;

/// Trait for getting a 2d point position of a sample
pub trait Point {
    /// Get 2d point position
    fn point(&self) -> P2;
}

impl Point for P2 {
    fn point(&self) -> P2 {
        *self
    }
}

impl Point for (f64, f64) {
    fn point(&self) -> P2 {
        point![self.0, self.1]
    }
}

impl Point for [f64; 2] {
    fn point(&self) -> P2 {
        point![self[0], self[1]]
    }
}
