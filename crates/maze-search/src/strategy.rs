use std::fmt;

use crate::frontier::Frontier;
use crate::heuristic::Heuristic;

/// Which search to run, with its heuristic for the informed variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Breadth-first search.
    Bfs,
    /// Depth-first search.
    Dfs,
    /// Greedy best-first search, ordered by `h`.
    Greedy(Heuristic),
    /// A* search, ordered by `g + h`.
    AStar(Heuristic),
}

impl Strategy {
    /// Stable result label, e.g. `"BFS"` or `"A*_Manhattan"`.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Bfs => "BFS",
            Strategy::Dfs => "DFS",
            Strategy::Greedy(Heuristic::Manhattan) => "Greedy_Manhattan",
            Strategy::Greedy(Heuristic::Euclidean) => "Greedy_Euclidean",
            Strategy::AStar(Heuristic::Manhattan) => "A*_Manhattan",
            Strategy::AStar(Heuristic::Euclidean) => "A*_Euclidean",
        }
    }

    /// Inverse of [`label`](Self::label), ignoring ASCII case.
    pub fn from_label(label: &str) -> Option<Self> {
        crate::experiment::EXPERIMENT_PLAN
            .iter()
            .copied()
            .find(|s| s.label().eq_ignore_ascii_case(label))
    }

    /// The heuristic, if this strategy uses one.
    pub fn heuristic(self) -> Option<Heuristic> {
        match self {
            Strategy::Bfs | Strategy::Dfs => None,
            Strategy::Greedy(h) | Strategy::AStar(h) => Some(h),
        }
    }

    /// Whether this strategy guarantees a minimum-step path.
    pub fn is_optimal(self) -> bool {
        matches!(self, Strategy::Bfs | Strategy::AStar(_))
    }

    /// Whether a position may be queued again with a lower cost.
    ///
    /// Only A* does this; the others mark positions visited when first
    /// queued and never look at them again.
    pub(crate) fn revisits(self) -> bool {
        matches!(self, Strategy::AStar(_))
    }

    pub(crate) fn frontier(self) -> Frontier {
        match self {
            Strategy::Bfs => Frontier::queue(),
            Strategy::Dfs => Frontier::stack(),
            Strategy::Greedy(_) | Strategy::AStar(_) => Frontier::heap(),
        }
    }

    /// Frontier priority of a node with cost `g` and estimate `h`.
    pub(crate) fn priority(self, g: u32, h: f64) -> f64 {
        match self {
            Strategy::Bfs | Strategy::Dfs => 0.0,
            Strategy::Greedy(_) => h,
            Strategy::AStar(_) => f64::from(g) + h,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
