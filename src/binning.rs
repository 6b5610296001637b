use crate::{
    error::{Error, Result},
    shapes::Rect,
};

/// Minimum population used when the caller has no better figure
pub const DEFAULT_MIN_POPULATION: usize = 10;

/// Recursion depth after which a range is forced into a terminal region
pub const DEFAULT_MAX_DEPTH: usize = 48;

/// Parameters of a single binning request.
///
/// ## Fields
/// - `bounds`: The rectangle the produced regions tile
/// - `min_population`: The number of points every quadrant needs for a split
/// - `max_depth`: The recursion depth safety bound
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBinning"))]
pub struct Binning {
    bounds: Rect,
    min_population: usize,
    max_depth: usize,
}

/// Unchecked wire form of [`Binning`]; deserialization goes through the validating
/// constructors
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBinning {
    bounds: Rect,
    min_population: usize,
    #[serde(default = "default_max_depth")]
    max_depth: usize,
}

#[cfg(feature = "serde")]
fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

#[cfg(feature = "serde")]
impl TryFrom<RawBinning> for Binning {
    type Error = Error;

    fn try_from(raw: RawBinning) -> Result<Self> {
        Binning::new(raw.bounds, raw.min_population)?.with_max_depth(raw.max_depth)
    }
}

impl Binning {
    /// Create a validated binning request
    ///
    /// **Returns** an error if the bounds are not finite, are inverted, or if
    /// `min_population` is zero
    pub fn new(bounds: Rect, min_population: usize) -> Result<Self> {
        if !bounds.is_finite() {
            return Err(Error::NonFiniteBounds);
        }
        if !bounds.is_ordered() {
            return Err(Error::InvalidBounds {
                xlo: bounds.xlo(),
                xhi: bounds.xhi(),
                ylo: bounds.ylo(),
                yhi: bounds.yhi(),
            });
        }
        if min_population == 0 {
            return Err(Error::InvalidMinPopulation);
        }
        Ok(Self {
            bounds,
            min_population,
            max_depth: DEFAULT_MAX_DEPTH,
        })
    }

    /// Override the recursion depth safety bound
    pub fn with_max_depth(mut self, max_depth: usize) -> Result<Self> {
        if max_depth == 0 {
            return Err(Error::InvalidMaxDepth);
        }
        self.max_depth = max_depth;
        Ok(self)
    }

    /// Get the rect the regions will tile
    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    /// Get the number of points every quadrant needs for a split
    pub fn min_population(&self) -> usize {
        self.min_population
    }

    /// Get the recursion depth safety bound
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}
