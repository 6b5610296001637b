use nalgebra::point;

use crate::{Quadrant, P2};

/// Arithmetic mean of the points, or `None` for an empty slice
pub(crate) fn centroid(points: &[P2]) -> Option<P2> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    if sx.is_finite() && sy.is_finite() {
        return Some(point![sx / n, sy / n]);
    }

    // The plain sum overflowed; a sum of pre-divided terms stays within the
    // largest coordinate.
    let (mx, my) = points
        .iter()
        .fold((0.0, 0.0), |(mx, my), p| (mx + p.x / n, my + p.y / n));
    Some(point![mx, my])
}

/// Move every item matching `pred` behind every item that does not.
///
/// **Returns** the index of the first matching item after the move
fn partition_in_place<F>(items: &mut [P2], pred: F) -> usize
where
    F: Fn(&P2) -> bool,
{
    let mut split = 0;
    for i in 0..items.len() {
        if !pred(&items[i]) {
            items.swap(split, i);
            split += 1;
        }
    }
    split
}

/// Reorder the points so quadrant 0 precedes 1, 1 precedes 2, and 2 precedes 3
/// relative to `centroid`.
///
/// **Returns** the three group boundaries: the start indices of quadrants 1, 2 and 3
pub(crate) fn group_by_quadrant(points: &mut [P2], centroid: &P2) -> [usize; 3] {
    let mid = partition_in_place(points, |p| p.x > centroid.x);
    let (left, right) = points.split_at_mut(mid);
    let top_left = partition_in_place(left, |p| p.y > centroid.y);
    let top_right = mid + partition_in_place(right, |p| p.y > centroid.y);

    debug_assert!(points[..top_left]
        .iter()
        .all(|p| Quadrant::BottomLeft.contains(p, centroid)));
    debug_assert!(points[top_right..]
        .iter()
        .all(|p| Quadrant::TopRight.contains(p, centroid)));

    [top_left, mid, top_right]
}
