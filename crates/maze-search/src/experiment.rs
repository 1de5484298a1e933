//! Comparative runs over the fixed strategy set.

use maze_core::{Grid, Point};

use crate::engine::{SearchOutcome, search};
use crate::error::SearchError;
use crate::heuristic::Heuristic;
use crate::strategy::Strategy;

/// The six runs every experiment performs, in report order.
pub const EXPERIMENT_PLAN: [Strategy; 6] = [
    Strategy::Dfs,
    Strategy::Bfs,
    Strategy::Greedy(Heuristic::Manhattan),
    Strategy::Greedy(Heuristic::Euclidean),
    Strategy::AStar(Heuristic::Manhattan),
    Strategy::AStar(Heuristic::Euclidean),
];

/// Metrics of one strategy run, detached from the search's node arena.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultRecord {
    pub strategy: Strategy,
    /// Start-to-goal positions, or `None` when no goal was reachable.
    pub path: Option<Vec<Point>>,
    pub nodes_expanded: usize,
    /// Wall-clock seconds.
    pub elapsed: f64,
    pub branching_factor: f64,
}

impl ResultRecord {
    /// Label of the strategy, e.g. `"Greedy_Euclidean"`.
    pub fn label(&self) -> &'static str {
        self.strategy.label()
    }

    /// Whether a path was found.
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of positions on the path (start and goal included).
    pub fn path_len(&self) -> Option<usize> {
        self.path.as_ref().map(Vec::len)
    }
}

impl From<SearchOutcome> for ResultRecord {
    fn from(out: SearchOutcome) -> Self {
        Self {
            strategy: out.strategy(),
            path: out.path(),
            nodes_expanded: out.nodes_expanded,
            elapsed: out.elapsed,
            branching_factor: out.branching_factor,
        }
    }
}

/// Results of all [`EXPERIMENT_PLAN`] runs from one start.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentReport {
    pub start: Point,
    records: Vec<ResultRecord>,
}

impl ExperimentReport {
    /// Record for the given label (case-insensitive), if present.
    pub fn get(&self, label: &str) -> Option<&ResultRecord> {
        self.records
            .iter()
            .find(|r| r.label().eq_ignore_ascii_case(label))
    }

    /// Record for the given strategy, if present.
    pub fn get_strategy(&self, strategy: Strategy) -> Option<&ResultRecord> {
        self.records.iter().find(|r| r.strategy == strategy)
    }

    /// Records in plan order.
    pub fn iter(&self) -> std::slice::Iter<'_, ResultRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a ExperimentReport {
    type Item = &'a ResultRecord;
    type IntoIter = std::slice::Iter<'a, ResultRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Run every strategy in [`EXPERIMENT_PLAN`] from `start`.
///
/// Each run builds its own frontier and bookkeeping, so runs are fully
/// independent. A run that finds no path yields a record with
/// `path: None`; it never aborts the others.
pub fn run_experiment(
    grid: &Grid,
    start: Point,
    goals: &[Point],
) -> Result<ExperimentReport, SearchError> {
    let mut records: Vec<ResultRecord> = Vec::with_capacity(EXPERIMENT_PLAN.len());
    for strategy in EXPERIMENT_PLAN {
        records.push(search(grid, start, goals, strategy)?.into());
    }
    log::debug!(
        "experiment from {start}: {}/{} runs found a path",
        records.iter().filter(|r| r.found()).count(),
        records.len()
    );
    Ok(ExperimentReport { start, records })
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use maze_core::Maze;

    #[test]
    fn report_round_trip() {
        let m = Maze::parse("2,0\n1,3").unwrap();
        let report = run_experiment(m.grid(), m.first_start(), m.goals()).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let back: ExperimentReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), report.len());
        for (a, b) in back.iter().zip(report.iter()) {
            assert_eq!(a.strategy, b.strategy);
            assert_eq!(a.path, b.path);
            assert_eq!(a.nodes_expanded, b.nodes_expanded);
        }
    }
}
