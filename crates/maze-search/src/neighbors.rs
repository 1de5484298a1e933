use maze_core::{Grid, Point};

/// Cached neighbor computation helper.
///
/// Enumerates the cardinal neighbors of a cell that are inside the grid and
/// not walls, always in the order up, right, down, left. Output depends only
/// on the input cell and grid.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the passable 4-directional neighbors of `p` in `grid`.
    pub fn cardinal(&mut self, p: Point, grid: &Grid) -> &[Point] {
        self.buf.clear();
        for n in p.neighbors_4() {
            if grid.is_passable(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Tile;

    #[test]
    fn open_cell_has_four_in_priority_order() {
        let g = Grid::new(3, 3);
        let mut nb = Neighbors::new();
        assert_eq!(
            nb.cardinal(Point::new(1, 1), &g),
            &[
                Point::new(0, 1),
                Point::new(1, 2),
                Point::new(2, 1),
                Point::new(1, 0),
            ]
        );
    }

    #[test]
    fn bounds_and_walls_are_filtered() {
        let g = Grid::new(3, 3).with_tile(Point::new(0, 1), Tile::Wall);
        let mut nb = Neighbors::new();
        assert_eq!(nb.cardinal(Point::new(0, 0), &g), &[Point::new(1, 0)]);
        assert_eq!(
            nb.cardinal(Point::new(1, 1), &g),
            &[Point::new(1, 2), Point::new(2, 1), Point::new(1, 0)]
        );
    }

    #[test]
    fn repeated_calls_agree() {
        let g = Grid::new(4, 4).with_tile(Point::new(2, 1), Tile::Wall);
        let mut nb = Neighbors::new();
        let first = nb.cardinal(Point::new(2, 2), &g).to_vec();
        let second = nb.cardinal(Point::new(2, 2), &g).to_vec();
        assert_eq!(first, second);
    }
}
