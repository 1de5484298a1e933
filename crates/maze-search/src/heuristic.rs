use maze_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    f64::from(a.row - b.row).hypot(f64::from(a.col - b.col))
}

/// Distance estimate used by the informed strategies.
///
/// Both variants are admissible and consistent for unit-cost 4-directional
/// movement; Euclidean is never larger than Manhattan, so it is looser.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    Manhattan,
    Euclidean,
}

impl Heuristic {
    /// Estimated cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> f64 {
        match self {
            Heuristic::Manhattan => f64::from(manhattan(from, to)),
            Heuristic::Euclidean => euclidean(from, to),
        }
    }

    /// Estimate to the nearest of several goals (the minimum over all of
    /// them). Returns `0.0` when `goals` is empty.
    pub fn nearest(self, from: Point, goals: &[Point]) -> f64 {
        goals
            .iter()
            .map(|&g| self.estimate(from, g))
            .reduce(f64::min)
            .unwrap_or(0.0)
    }

    /// Short name used in result labels.
    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Manhattan => "Manhattan",
            Heuristic::Euclidean => "Euclidean",
        }
    }
}
