use nalgebra::point;

use crate::{
    binning::Binning,
    error::{Error, Result},
    partition::partition,
    region::Region,
    shapes::Rect,
    Point, P2,
};

/// An accumulating collection of 2d samples with memoized adaptive bins.
///
/// Points keep their insertion order. Binning works on a private copy, and the last
/// result is cached until the points change or a different request comes in.
#[derive(Debug, Default, Clone)]
pub struct Dataset {
    points: Vec<P2>,
    revision: u64,
    cache: Option<BinCache>,
}

/// Regions computed for one request against one revision of the points
#[derive(Debug, Clone)]
struct BinCache {
    binning: Binning,
    revision: u64,
    regions: Vec<Region>,
}

impl Dataset {
    /// Create a new empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample
    pub fn add(&mut self, x: f64, y: f64) {
        self.points.push(point![x, y]);
        self.touch();
    }

    /// Append any item with a 2d position
    pub fn add_point<T: Point>(&mut self, item: &T) {
        self.points.push(item.point());
        self.touch();
    }

    /// Append samples given as two parallel columns of x and y values.
    ///
    /// **Returns** an error, leaving the dataset untouched, if the columns differ in
    /// length
    pub fn add_columns<X, Y>(&mut self, xs: X, ys: Y) -> Result<()>
    where
        X: IntoIterator<Item = f64>,
        Y: IntoIterator<Item = f64>,
    {
        let xs = xs.into_iter().collect::<Vec<_>>();
        let ys = ys.into_iter().collect::<Vec<_>>();
        if xs.len() != ys.len() {
            return Err(Error::LengthMismatch {
                x: xs.len(),
                y: ys.len(),
            });
        }
        self.points
            .extend(xs.into_iter().zip(ys).map(|(x, y)| point![x, y]));
        self.touch();
        Ok(())
    }

    /// Replace all samples with the given columns
    pub fn set_columns<X, Y>(&mut self, xs: X, ys: Y) -> Result<()>
    where
        X: IntoIterator<Item = f64>,
        Y: IntoIterator<Item = f64>,
    {
        let mut fresh = Dataset::new();
        fresh.add_columns(xs, ys)?;
        self.clear();
        self.points = fresh.points;
        self.touch();
        Ok(())
    }

    /// Remove all samples and any cached bins
    pub fn clear(&mut self) {
        self.points.clear();
        self.cache = None;
        self.touch();
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Samples in insertion order
    pub fn points(&self) -> &[P2] {
        &self.points
    }

    /// Compute the adaptive bins tiling `bounds`, where every split quadrant holds at
    /// least `min_population` points.
    ///
    /// **Returns** an error if the bounds are inverted or not finite, or if
    /// `min_population` is zero
    pub fn adaptive_bins(&mut self, bounds: Rect, min_population: usize) -> Result<Vec<Region>> {
        let binning = Binning::new(bounds, min_population)?;
        Ok(self.bins(&binning).to_vec())
    }

    /// Compute the adaptive bins for a validated request, reusing the previous result
    /// when neither the points nor the request changed.
    ///
    /// Points outside the bounds are left out of the partition.
    pub fn bins(&mut self, binning: &Binning) -> &[Region] {
        if self.is_cached(binning) {
            log::debug!("reusing {} cached regions", self.cached_len());
        } else {
            let bounds = binning.bounds();
            let mut working = self
                .points
                .iter()
                .filter(|p| bounds.contains(p))
                .copied()
                .collect::<Vec<_>>();
            let excluded = self.points.len() - working.len();
            if excluded > 0 {
                log::debug!("{excluded} of {} points lie outside the bounds", self.points.len());
            }

            let regions = partition(&mut working, binning);
            log::debug!(
                "partitioned {} points into {} regions (min population {})",
                working.len(),
                regions.len(),
                binning.min_population()
            );
            self.cache = Some(BinCache {
                binning: *binning,
                revision: self.revision,
                regions,
            });
        }

        match &self.cache {
            Some(cache) => &cache.regions,
            None => &[],
        }
    }

    /// Check if bins for `binning` are cached and still valid
    pub fn is_cached(&self, binning: &Binning) -> bool {
        self.cache
            .as_ref()
            .is_some_and(|c| c.revision == self.revision && c.binning == *binning)
    }

    fn cached_len(&self) -> usize {
        self.cache.as_ref().map_or(0, |c| c.regions.len())
    }

    /// Invalidate any cached bins
    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T: Point> Extend<T> for Dataset {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.points.extend(iter.into_iter().map(|item| item.point()));
        self.touch();
    }
}

impl<T: Point> FromIterator<T> for Dataset {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut dataset = Dataset::new();
        dataset.extend(iter);
        dataset
    }
}
