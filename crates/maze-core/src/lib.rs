//! **maze-core** — grid model for maze search experiments.
//!
//! This crate provides the types every other part of the workspace builds
//! on: [`Point`] coordinates, [`Tile`] symbols, the immutable [`Grid`], the
//! comma-separated text parser, and the [`Maze`] bundle that pairs a grid
//! with its start and goal markers.

pub mod error;
pub mod geom;
pub mod grid;
pub mod maze;
pub mod parse;
pub mod tile;

pub use error::MazeError;
pub use geom::Point;
pub use grid::{Grid, GridIter};
pub use maze::Maze;
pub use parse::{locate_markers, parse, parse_lines};
pub use tile::Tile;
