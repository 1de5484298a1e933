use maze_core::Point;
use thiserror::Error;

/// Errors raised by the search engine and experiment runner.
///
/// Failing to find a path is not an error: it is reported as a
/// [`SearchOutcome`](crate::SearchOutcome) without a terminal node.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The start coordinate lies outside the grid.
    #[error("start {0} is outside the grid")]
    StartOutOfBounds(Point),

    /// Batch mode needs at least one free cell to sample starts from.
    #[error("maze has no free cells to sample starts from")]
    NoFreeCells,
}
