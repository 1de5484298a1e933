//! The [`Grid`] type — an immutable, rectangular 2D array of [`Tile`]s.
//!
//! Storage is a flat row-major buffer; the grid never changes once built,
//! so searches can borrow it freely.

use crate::geom::Point;
use crate::tile::Tile;

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular maze grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<Tile>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Create a grid of the given dimensions filled with [`Tile::Free`].
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            tiles: vec![Tile::Free; rows * cols],
            rows,
            cols,
        }
    }

    /// Build a grid from rows of tiles.
    ///
    /// Returns `None` if the rows do not all have the same length.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Option<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != cols) {
            return None;
        }
        let n = rows.len();
        Some(Self {
            tiles: rows.into_iter().flatten().collect(),
            rows: n,
            cols,
        })
    }

    /// Assemble a grid from a flat row-major buffer of `rows * cols` tiles.
    pub(crate) fn from_parts(rows: usize, cols: usize, tiles: Vec<Tile>) -> Self {
        debug_assert_eq!(tiles.len(), rows * cols);
        Self { tiles, rows, cols }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.row >= 0 && p.col >= 0 && (p.row as usize) < self.rows && (p.col as usize) < self.cols
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols + p.col as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        Point::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    /// Tile at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.index(p).map(|i| self.tiles[i])
    }

    /// Whether `p` is in bounds and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Tile::is_passable)
    }

    /// Return a copy of the grid with the tile at `p` replaced.
    /// Out-of-bounds points leave the grid unchanged.
    pub fn with_tile(mut self, p: Point, tile: Tile) -> Self {
        if let Some(i) = self.index(p) {
            self.tiles[i] = tile;
        }
        self
    }

    /// Count how many cells hold `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Every plain [`Tile::Free`] cell, in row-major order.
    ///
    /// Start and goal markers are excluded.
    pub fn free_cells(&self) -> Vec<Point> {
        self.iter()
            .filter(|&(_, t)| t == Tile::Free)
            .map(|(p, _)| p)
            .collect()
    }

    /// Row-major iterator over `(Point, Tile)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter { grid: self, idx: 0 }
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Point, Tile)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    idx: usize,
}

impl Iterator for GridIter<'_> {
    type Item = (Point, Tile);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let tile = *self.grid.tiles.get(self.idx)?;
        let p = self.grid.point(self.idx);
        self.idx += 1;
        Some((p, tile))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.grid.tiles.len().saturating_sub(self.idx);
        (n, Some(n))
    }
}

impl ExactSizeIterator for GridIter<'_> {}

impl<'a> IntoIterator for &'a Grid {
    type Item = (Point, Tile);
    type IntoIter = GridIter<'a>;

    fn into_iter(self) -> GridIter<'a> {
        self.iter()
    }
}
