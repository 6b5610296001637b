use crate::{
    binning::Binning,
    region::{Region, Stop},
    shapes::Rect,
    util::{centroid, group_by_quadrant},
    P2,
};

/// Partition the plane inside `binning.bounds()` into regions holding at least
/// `binning.min_population()` points per split quadrant.
///
/// The points are reordered in place, so pass a working copy when the caller's order
/// matters. Every point is counted in exactly one region; points outside the bounds
/// are still counted, in the region nearest to them.
///
/// **Returns** the terminal regions, which tile the bounds without overlap
pub fn partition(points: &mut [P2], binning: &Binning) -> Vec<Region> {
    let mut partitioner = Partitioner::new(binning);
    partitioner.split(points, *binning.bounds(), 0);

    if partitioner.depth_limited > 0 {
        log::warn!(
            "{} of {} regions hit the depth bound of {}",
            partitioner.depth_limited,
            partitioner.regions.len(),
            binning.max_depth()
        );
    }
    debug_assert_eq!(
        partitioner.regions.iter().map(Region::content).sum::<f64>(),
        points.len() as f64
    );

    partitioner.regions
}

struct Partitioner<'a> {
    binning: &'a Binning,
    regions: Vec<Region>,
    depth_limited: usize,
}

impl<'a> Partitioner<'a> {
    fn new(binning: &'a Binning) -> Self {
        Self {
            binning,
            regions: Vec::new(),
            depth_limited: 0,
        }
    }

    fn split(&mut self, points: &mut [P2], rect: Rect, depth: usize) {
        let Some(centroid) = centroid(points) else {
            self.terminate(rect, 0, Stop::Empty, depth);
            return;
        };
        // Keep the pivot inside the rect so the four pieces stay well-formed.
        let centroid = rect.clamp(&centroid);

        let [b1, b2, b3] = group_by_quadrant(points, &centroid);
        let n = points.len();
        let sizes = [b1, b2 - b1, b3 - b2, n - b3];

        if sizes.iter().any(|&s| s < self.binning.min_population()) {
            self.terminate(rect, n, Stop::Threshold, depth);
            return;
        }
        if depth >= self.binning.max_depth() {
            self.depth_limited += 1;
            self.terminate(rect, n, Stop::DepthLimit, depth);
            return;
        }

        let (low, high) = points.split_at_mut(b2);
        let (bottom_left, top_left) = low.split_at_mut(b1);
        let (bottom_right, top_right) = high.split_at_mut(b3 - b2);
        let [r0, r1, r2, r3] = rect.split_at(&centroid);

        self.split(bottom_left, r0, depth + 1);
        self.split(top_left, r1, depth + 1);
        self.split(bottom_right, r2, depth + 1);
        self.split(top_right, r3, depth + 1);
    }

    fn terminate(&mut self, rect: Rect, count: usize, stop: Stop, depth: usize) {
        log::trace!(
            "terminal region x [{}, {}] y [{}, {}]: {count} points ({stop:?})",
            rect.xlo(),
            rect.xhi(),
            rect.ylo(),
            rect.yhi()
        );
        self.regions
            .push(Region::at_depth(rect, count as f64, stop, depth));
    }
}
