//! Repeated experiments from randomly sampled start cells.

use maze_core::{Grid, Maze, Point};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::SearchError;
use crate::experiment::{ExperimentReport, run_experiment};

/// One experiment of a batch, tagged with its sampled start.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchRun {
    pub start: Point,
    pub report: ExperimentReport,
}

/// Draw up to `count` distinct free cells (value 0) without replacement.
///
/// Fewer than `count` are returned when the grid has fewer free cells. The
/// result depends only on the grid and the state of `rng`.
pub fn sample_starts<R: Rng>(grid: &Grid, count: usize, rng: &mut R) -> Vec<Point> {
    let mut cells = grid.free_cells();
    let n = count.min(cells.len());
    let (picked, _) = cells.partial_shuffle(rng, n);
    picked.to_vec()
}

/// Run the full experiment from `count` randomly sampled free cells.
pub fn run_batch<R: Rng>(
    maze: &Maze,
    count: usize,
    rng: &mut R,
) -> Result<Vec<BatchRun>, SearchError> {
    let starts = sample_starts(maze.grid(), count, rng);
    if starts.is_empty() && count > 0 {
        return Err(SearchError::NoFreeCells);
    }
    log::info!("batch: {} random starts", starts.len());

    starts
        .into_iter()
        .map(|start| {
            let report = run_experiment(maze.grid(), start, maze.goals())?;
            Ok(BatchRun { start, report })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Tile;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    const MAZE: &str = "\
2,0,0,0
0,1,1,0
0,0,0,3";

    #[test]
    fn samples_are_distinct_free_cells() {
        let m = Maze::parse(MAZE).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let starts = sample_starts(m.grid(), 5, &mut rng);
        assert_eq!(starts.len(), 5);
        let unique: HashSet<Point> = starts.iter().copied().collect();
        assert_eq!(unique.len(), 5);
        for p in &starts {
            assert_eq!(m.grid().at(*p), Some(Tile::Free));
        }
    }

    #[test]
    fn sample_is_capped_by_free_cells() {
        let m = Maze::parse(MAZE).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let starts = sample_starts(m.grid(), 100, &mut rng);
        assert_eq!(starts.len(), m.grid().count(Tile::Free));
    }

    #[test]
    fn sampling_is_seed_deterministic() {
        let m = Maze::parse(MAZE).unwrap();
        let a = sample_starts(m.grid(), 4, &mut StdRng::seed_from_u64(9));
        let b = sample_starts(m.grid(), 4, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
        assert!(sample_starts(m.grid(), 0, &mut StdRng::seed_from_u64(9)).is_empty());
    }

    #[test]
    fn same_seed_same_batch() {
        let m = Maze::parse(MAZE).unwrap();
        let a = run_batch(&m, 3, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = run_batch(&m, 3, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a.len(), 3);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.start, y.start);
            assert_eq!(x.report.start, x.start);
            for (rx, ry) in x.report.iter().zip(y.report.iter()) {
                assert_eq!(rx.path, ry.path);
                assert_eq!(rx.nodes_expanded, ry.nodes_expanded);
            }
        }
    }

    #[test]
    fn no_free_cells() {
        let m = Maze::parse("2,1\n1,3").unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            run_batch(&m, 3, &mut rng).unwrap_err(),
            SearchError::NoFreeCells
        );
        assert!(run_batch(&m, 0, &mut rng).unwrap().is_empty());
    }
}
