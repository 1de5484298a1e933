use thiserror::Error;

/// Errors raised while turning maze text into a [`Maze`](crate::Maze).
///
/// Everything here is detected eagerly, before any search runs.
#[derive(Error, Debug)]
pub enum MazeError {
    /// A token could not be read as an integer.
    #[error("line {line}, column {column}: `{token}` is not an integer")]
    InvalidToken {
        line: usize,
        column: usize,
        token: String,
    },

    /// An integer outside the known tile codes (0..=3).
    #[error("line {line}, column {column}: unknown cell value {value}")]
    UnknownCell {
        line: usize,
        column: usize,
        value: i64,
    },

    /// A row whose length differs from the first row.
    #[error("line {line}: expected {expected} cells, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// No cell is marked as a start (value 2).
    #[error("maze has no start cell (value 2)")]
    NoStart,

    /// No cell is marked as a goal (value 3).
    #[error("maze has no goal cell (value 3)")]
    NoGoal,

    /// Failure reading the maze source.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MazeError {
    /// Whether the text itself could not be parsed into a rectangular grid.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::InvalidToken { .. } | Self::UnknownCell { .. } | Self::RaggedRow { .. }
        )
    }
}
