use crate::P2;

/// Position of a point relative to a reference coordinate.
///
/// Points on a dividing line belong to the lower/left side, so every point falls
/// into exactly one quadrant. The discriminant is the quadrant code
/// `2 * (x > xc) + (y > yc)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quadrant {
    /// `x <= xc`, `y <= yc`
    BottomLeft = 0,
    /// `x <= xc`, `y > yc`
    TopLeft = 1,
    /// `x > xc`, `y <= yc`
    BottomRight = 2,
    /// `x > xc`, `y > yc`
    TopRight = 3,
}

impl Quadrant {
    /// All quadrants in code order
    pub const ALL: [Quadrant; 4] = [
        Quadrant::BottomLeft,
        Quadrant::TopLeft,
        Quadrant::BottomRight,
        Quadrant::TopRight,
    ];

    /// Classify `point` relative to `centroid`
    pub fn of(point: &P2, centroid: &P2) -> Self {
        match (point.x > centroid.x, point.y > centroid.y) {
            (false, false) => Quadrant::BottomLeft,
            (false, true) => Quadrant::TopLeft,
            (true, false) => Quadrant::BottomRight,
            (true, true) => Quadrant::TopRight,
        }
    }

    /// Numeric quadrant code in `0..4`
    pub fn code(self) -> usize {
        self as usize
    }

    /// Inverse of [`Quadrant::code`]
    pub fn from_code(code: usize) -> Option<Self> {
        Self::ALL.get(code).copied()
    }

    /// Check if `point` lies in this quadrant relative to `centroid`
    pub fn contains(self, point: &P2, centroid: &P2) -> bool {
        Self::of(point, centroid) == self
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::point;

    use super::*;

    #[test]
    fn classify_points() {
        let centroid = point![0.0, 0.0];
        let points = [
            point![-1.0, -1.0],
            point![-1.0, 1.0],
            point![1.0, -1.0],
            point![1.0, 1.0],
        ];

        let results = points
            .iter()
            .map(|p| Quadrant::of(p, &centroid))
            .collect::<Vec<_>>();

        assert_eq!(
            results,
            Quadrant::ALL,
            "Each point should match its expected quadrant"
        );
    }

    #[test]
    fn points_on_dividing_lines_go_low() {
        let centroid = point![0.0, 0.0];
        assert_eq!(
            Quadrant::of(&point![0.0, 0.0], &centroid),
            Quadrant::BottomLeft,
            "The centroid itself belongs to the bottom-left quadrant"
        );
        assert_eq!(Quadrant::of(&point![0.0, 1.0], &centroid), Quadrant::TopLeft);
        assert_eq!(
            Quadrant::of(&point![1.0, 0.0], &centroid),
            Quadrant::BottomRight
        );
        assert_eq!(
            Quadrant::of(&point![-1.0, 0.0], &centroid),
            Quadrant::BottomLeft
        );
    }

    #[test]
    fn codes_match_arithmetic_encoding() {
        let centroid = point![0.5, -0.5];
        for p in [
            point![0.2, -0.9],
            point![0.2, 3.0],
            point![0.7, -0.5],
            point![9.0, 9.0],
        ] {
            let expected = 2 * usize::from(p.x > centroid.x) + usize::from(p.y > centroid.y);
            assert_eq!(Quadrant::of(&p, &centroid).code(), expected);
        }
    }

    #[test]
    fn code_round_trip_and_membership() {
        for q in Quadrant::ALL {
            assert_eq!(Quadrant::from_code(q.code()), Some(q));
        }
        assert_eq!(Quadrant::from_code(4), None);

        let centroid = point![0.0, 0.0];
        let p = point![2.0, 3.0];
        assert!(Quadrant::TopRight.contains(&p, &centroid));
        assert!(
            Quadrant::ALL
                .iter()
                .filter(|q| q.contains(&p, &centroid))
                .count()
                == 1,
            "A point should belong to exactly one quadrant"
        );
    }
}
