use std::collections::HashSet;

use maze_core::{Grid, Point, Tile};

/// Draw the grid as text with `path` overlaid.
///
/// `#` wall, `.` free, `S` start, `G` goal, `*` path cell. Markers are kept
/// where the path crosses them.
pub fn overlay(grid: &Grid, path: &[Point]) -> String {
    let on_path: HashSet<Point> = path.iter().copied().collect();
    let mut out = String::with_capacity(grid.len() + grid.rows());
    for (p, tile) in grid.iter() {
        let ch = match tile {
            Tile::Wall => '#',
            Tile::Start => 'S',
            Tile::Goal => 'G',
            Tile::Free if on_path.contains(&p) => '*',
            Tile::Free => '.',
        };
        out.push(ch);
        if p.col as usize + 1 == grid.cols() {
            out.push('\n');
        }
    }
    out
}
