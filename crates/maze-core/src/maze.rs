//! The [`Maze`] bundle: a grid plus its ordered start and goal markers.

use crate::error::MazeError;
use crate::geom::Point;
use crate::grid::Grid;
use crate::parse::{locate_markers, parse, parse_lines};

/// A parsed grid together with its start and goal positions.
///
/// Construction fails unless there is at least one start and one goal, so
/// code holding a `Maze` never has to check for empty marker lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    starts: Vec<Point>,
    goals: Vec<Point>,
}

impl Maze {
    /// Wrap an already parsed grid.
    pub fn from_grid(grid: Grid) -> Result<Self, MazeError> {
        let (starts, goals) = locate_markers(&grid);
        if starts.is_empty() {
            return Err(MazeError::NoStart);
        }
        if goals.is_empty() {
            return Err(MazeError::NoGoal);
        }
        Ok(Self {
            grid,
            starts,
            goals,
        })
    }

    /// Parse maze text.
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        Self::from_grid(parse(text)?)
    }

    /// Parse a sequence of maze lines.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, MazeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_grid(parse_lines(lines)?)
    }

    /// The underlying grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Start positions in row-major order. Never empty.
    #[inline]
    pub fn starts(&self) -> &[Point] {
        &self.starts
    }

    /// Goal positions in row-major order. Never empty.
    #[inline]
    pub fn goals(&self) -> &[Point] {
        &self.goals
    }

    /// The first start in scan order.
    #[inline]
    pub fn first_start(&self) -> Point {
        self.starts[0]
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use crate::{Point, Tile};

    #[test]
    fn point_round_trip() {
        let p = Point::new(3, 7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn tile_round_trip() {
        let json = serde_json::to_string(&Tile::Goal).unwrap();
        let back: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Tile::Goal);
    }
}
