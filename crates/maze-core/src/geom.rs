//! Geometry primitive: [`Point`].
//!
//! Coordinates are `(row, col)`, 0-indexed, with rows growing downward.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A grid coordinate. `row` grows down, `col` grows right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Unit offsets in expansion priority order: up, right, down, left.
    pub const CARDINALS: [Point; 4] = [
        Point::new(-1, 0),
        Point::new(0, 1),
        Point::new(1, 0),
        Point::new(0, -1),
    ];

    /// Create a new point.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The four cardinal neighbours (up, right, down, left).
    ///
    /// The order is fixed: searches rely on it to break ties.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        Self::CARDINALS.map(|d| self + d)
    }

    /// Whether `other` is exactly one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

// --- trait impls for Point ---

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    /// Row-major order, matching the grid scan order.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Point {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_are_up_right_down_left() {
        let p = Point::new(3, 3);
        assert_eq!(
            p.neighbors_4(),
            [
                Point::new(2, 3),
                Point::new(3, 4),
                Point::new(4, 3),
                Point::new(3, 2),
            ]
        );
    }

    #[test]
    fn ordering_is_row_major() {
        let mut pts = vec![Point::new(1, 0), Point::new(0, 5), Point::new(0, 1)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(0, 1), Point::new(0, 5), Point::new(1, 0)]);
    }

    #[test]
    fn adjacency() {
        let p = Point::new(2, 2);
        assert!(p.is_adjacent(Point::new(1, 2)));
        assert!(p.is_adjacent(Point::new(2, 3)));
        assert!(!p.is_adjacent(Point::new(3, 3)));
        assert!(!p.is_adjacent(p));
    }

    #[test]
    fn display_and_arith() {
        let p = Point::new(1, 2) + Point::new(3, 4);
        assert_eq!(p, Point::new(4, 6));
        assert_eq!(p - Point::new(4, 6), Point::ZERO);
        assert_eq!(p.to_string(), "(4, 6)");
        assert_eq!(Point::from((7, 8)), Point::new(7, 8));
    }
}
