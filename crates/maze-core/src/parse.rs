//! Maze text format.
//!
//! One grid row per line, cells separated by commas, each cell an integer
//! tile code (`0` free, `1` wall, `2` start, `3` goal). Blank lines are
//! skipped and empty tokens (e.g. a trailing comma) are ignored. There is no
//! header: dimensions come from the row and column counts.
//!
//! ```text
//! 2,0,1
//! 0,0,1
//! 1,0,3
//! ```

use std::io::BufRead;
use std::str::FromStr;

use crate::error::MazeError;
use crate::geom::Point;
use crate::grid::Grid;
use crate::tile::Tile;

/// Parse a whole maze text into a [`Grid`].
pub fn parse(text: &str) -> Result<Grid, MazeError> {
    parse_lines(text.lines())
}

/// Parse a sequence of text lines into a [`Grid`].
///
/// Fails on the first token that is not an integer, on an integer that is
/// not a tile code, or on a row whose length differs from the first row.
pub fn parse_lines<I, S>(lines: I) -> Result<Grid, MazeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tiles: Vec<Tile> = Vec::new();
    let mut rows = 0;
    let mut cols = 0;

    for (n, line) in lines.into_iter().enumerate() {
        let line_no = n + 1;
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }

        let row = parse_row(line, line_no)?;
        if rows == 0 {
            cols = row.len();
        } else if row.len() != cols {
            return Err(MazeError::RaggedRow {
                line: line_no,
                expected: cols,
                found: row.len(),
            });
        }
        tiles.extend(row);
        rows += 1;
    }

    Ok(Grid::from_parts(rows, cols, tiles))
}

fn parse_row(line: &str, line_no: usize) -> Result<Vec<Tile>, MazeError> {
    let mut row = Vec::new();
    for token in line.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let column = row.len() + 1;
        let value: i64 = token.parse().map_err(|_| MazeError::InvalidToken {
            line: line_no,
            column,
            token: token.to_string(),
        })?;
        let tile = Tile::try_from(value).map_err(|value| MazeError::UnknownCell {
            line: line_no,
            column,
            value,
        })?;
        row.push(tile);
    }
    Ok(row)
}

/// Scan every cell in row-major order and collect start and goal positions.
///
/// Returns `(starts, goals)`. The order is the scan order, so the first
/// start is the top-most, then left-most one.
pub fn locate_markers(grid: &Grid) -> (Vec<Point>, Vec<Point>) {
    let mut starts = Vec::new();
    let mut goals = Vec::new();
    for (p, tile) in grid.iter() {
        match tile {
            Tile::Start => starts.push(p),
            Tile::Goal => goals.push(p),
            Tile::Free | Tile::Wall => {}
        }
    }
    (starts, goals)
}

impl FromStr for Grid {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl Grid {
    /// Read and parse a maze from any buffered reader (a file, stdin, ...).
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, MazeError> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        parse_lines(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic() {
        let g = parse("2,0,1\n0,0,1\n1,0,3\n").unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.at(Point::new(0, 0)), Some(Tile::Start));
        assert_eq!(g.at(Point::new(0, 2)), Some(Tile::Wall));
        assert_eq!(g.at(Point::new(2, 2)), Some(Tile::Goal));
    }

    #[test]
    fn blank_lines_and_whitespace_are_skipped() {
        let g = parse("\n  2, 0 ,0  \n\n   \n0,0,3,\n").unwrap();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.at(Point::new(1, 2)), Some(Tile::Goal));
    }

    #[test]
    fn empty_text_is_empty_grid() {
        let g = parse("\n\n").unwrap();
        assert!(g.is_empty());
        assert_eq!(g.rows(), 0);
    }

    #[test]
    fn non_integer_token() {
        let err = parse("0,0\n0,x\n").unwrap_err();
        assert!(matches!(
            err,
            MazeError::InvalidToken { line: 2, column: 2, ref token } if token == "x"
        ));
        assert!(err.is_malformed());
    }

    #[test]
    fn unknown_cell_value() {
        let err = parse("0,7").unwrap_err();
        assert!(matches!(
            err,
            MazeError::UnknownCell {
                line: 1,
                column: 2,
                value: 7
            }
        ));
    }

    #[test]
    fn ragged_rows() {
        let err = parse("0,0,0\n\n0,0\n").unwrap_err();
        assert!(matches!(
            err,
            MazeError::RaggedRow {
                line: 3,
                expected: 3,
                found: 2
            }
        ));
        assert!(err.is_malformed());
    }

    #[test]
    fn markers_in_scan_order() {
        let g = parse("0,3,2\n2,0,0\n3,0,0").unwrap();
        let (starts, goals) = locate_markers(&g);
        assert_eq!(starts, vec![Point::new(0, 2), Point::new(1, 0)]);
        assert_eq!(goals, vec![Point::new(0, 1), Point::new(2, 0)]);
    }

    #[test]
    fn from_str_and_reader() {
        let a: Grid = "2,1\n0,3".parse().unwrap();
        let b = Grid::from_reader(std::io::Cursor::new("2,1\n0,3\n")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn dimensions_come_from_rows_and_columns() {
        let g = parse("\n0,1,0,0\n\n2,0,3,1\n").unwrap();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.len(), 8);
        assert_eq!(g.at(Point::new(1, 2)), Some(Tile::Goal));
        assert_eq!(g.at(Point::new(0, 1)), Some(Tile::Wall));
    }

    #[test]
    fn reader_failure_keeps_io_error() {
        let bytes: &[u8] = &[b'2', b',', 0xff, 0xfe, b'\n'];
        let err = Grid::from_reader(bytes).unwrap_err();
        assert!(matches!(
            err,
            MazeError::Io(ref e) if e.kind() == std::io::ErrorKind::InvalidData
        ));
        assert!(!err.is_malformed());
    }
}
