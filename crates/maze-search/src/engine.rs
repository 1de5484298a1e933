use std::time::Instant;

use maze_core::{Grid, Point};

use crate::error::SearchError;
use crate::neighbors::Neighbors;
use crate::node::{NodeArena, NodeId, SearchNode};
use crate::strategy::Strategy;

/// Sentinel for "no cost recorded yet" in the A* cost map.
const UNSEEN: u32 = u32::MAX;

/// Everything one search run produced.
///
/// The node arena is kept alive so the terminal node's parent chain can be
/// walked; drop the outcome (or turn it into a
/// [`ResultRecord`](crate::ResultRecord)) to release it.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    strategy: Strategy,
    nodes: NodeArena,
    terminal: Option<NodeId>,
    /// Nodes taken off the frontier and processed. Stale A* entries that are
    /// discarded on removal are not counted.
    pub nodes_expanded: usize,
    /// Children pushed onto the frontier.
    pub children_generated: usize,
    /// Wall-clock duration in seconds.
    pub elapsed: f64,
    /// `children_generated / nodes_expanded`, or 0 if nothing was expanded.
    pub branching_factor: f64,
}

impl SearchOutcome {
    /// The strategy that produced this outcome.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Whether a goal was reached.
    pub fn found(&self) -> bool {
        self.terminal.is_some()
    }

    /// The goal node the search stopped at, if any.
    pub fn terminal(&self) -> Option<&SearchNode> {
        self.terminal.map(|id| &self.nodes[id])
    }

    /// Positions from the start to the reached goal, or `None` if no goal
    /// was reached.
    pub fn path(&self) -> Option<Vec<Point>> {
        self.terminal.map(|id| self.nodes.path(id))
    }
}

/// Run one search from `start` until any position in `goals` is expanded or
/// the frontier empties.
///
/// Neighbors are generated up, right, down, left. BFS, DFS and greedy search
/// mark a position visited when it is queued; A* instead records the best
/// `g` per position when it is expanded, queues a position again whenever a
/// cheaper route turns up, and discards stale queue entries without counting
/// them.
///
/// Reaching no goal is not an error. The only error is a `start` outside the
/// grid. Goals outside the grid are ignored.
pub fn search(
    grid: &Grid,
    start: Point,
    goals: &[Point],
    strategy: Strategy,
) -> Result<SearchOutcome, SearchError> {
    let start_idx = grid
        .index(start)
        .ok_or(SearchError::StartOutOfBounds(start))?;
    if !grid.is_passable(start) {
        log::warn!("{strategy}: start {start} is a wall");
    }

    let timer = Instant::now();

    let heuristic = strategy.heuristic();
    let estimate = |p: Point| heuristic.map_or(0.0, |h| h.nearest(p, goals));

    let mut is_goal = vec![false; grid.len()];
    for &g in goals {
        if let Some(gi) = grid.index(g) {
            is_goal[gi] = true;
        }
    }

    let revisits = strategy.revisits();
    let mut seen = vec![false; grid.len()];
    let mut best_g = vec![UNSEEN; grid.len()];

    let mut nodes = NodeArena::new();
    let mut frontier = strategy.frontier();
    let mut nbuf = Neighbors::new();

    let root = nodes.push_root(start, estimate(start));
    if !revisits {
        seen[start_idx] = true;
    }
    frontier.push(root, strategy.priority(0, nodes[root].h));

    let mut nodes_expanded = 0usize;
    let mut children_generated = 0usize;
    let mut terminal = None;

    // DFS pushes in reverse so the stack pops in priority order.
    let reverse = matches!(strategy, Strategy::Dfs);

    while let Some(id) = frontier.pop() {
        let node = nodes[id];
        let Some(ci) = grid.index(node.pos) else {
            continue;
        };

        // Skip stale entries.
        if revisits && best_g[ci] <= node.g {
            continue;
        }

        nodes_expanded += 1;
        log::trace!("{strategy}: expand {} g={} h={:.3}", node.pos, node.g, node.h);

        if is_goal[ci] {
            terminal = Some(id);
            break;
        }

        if revisits {
            best_g[ci] = node.g;
        }

        let g = node.g + 1;
        let nbrs = nbuf.cardinal(node.pos, grid);
        let n = nbrs.len();
        for k in 0..n {
            let np = nbrs[if reverse { n - 1 - k } else { k }];
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if revisits {
                if best_g[ni] <= g {
                    continue;
                }
            } else {
                if seen[ni] {
                    continue;
                }
                seen[ni] = true;
            }

            let h = estimate(np);
            let child = nodes.push_child(id, np, h);
            frontier.push(child, strategy.priority(g, h));
            children_generated += 1;
        }
    }

    let elapsed = timer.elapsed().as_secs_f64();
    let branching_factor = if nodes_expanded > 0 {
        children_generated as f64 / nodes_expanded as f64
    } else {
        0.0
    };

    match terminal {
        Some(id) => log::debug!(
            "{strategy}: reached {} in {} steps, expanded {nodes_expanded}, {elapsed:.6}s",
            nodes[id].pos,
            nodes[id].g
        ),
        None => log::debug!("{strategy}: no path, expanded {nodes_expanded}, {elapsed:.6}s"),
    }

    Ok(SearchOutcome {
        strategy,
        nodes,
        terminal,
        nodes_expanded,
        children_generated,
        elapsed,
        branching_factor,
    })
}
