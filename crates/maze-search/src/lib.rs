//! Search strategies for maze grids.
//!
//! This crate implements four classical graph searches over a
//! [`maze_core::Grid`] with unit-cost, 4-directional movement:
//!
//! - **Breadth-first** ([`Strategy::Bfs`]) — FIFO frontier, shortest path in steps
//! - **Depth-first** ([`Strategy::Dfs`]) — LIFO frontier, no optimality
//! - **Greedy best-first** ([`Strategy::Greedy`]) — ordered by heuristic alone
//! - **A\*** ([`Strategy::AStar`]) — ordered by `g + h`, optimal with an admissible heuristic
//!
//! All four run through [`search`], which shares neighbor generation, node
//! bookkeeping and path reconstruction. [`run_experiment`] runs the fixed set
//! of six strategy/heuristic combinations and collects a [`ResultRecord`] for
//! each; [`run_batch`] repeats that from randomly sampled free cells.
//!
//! # Tie-breaking
//!
//! Neighbors are always generated up, right, down, left. Priority-queue
//! frontiers break equal priorities by insertion order (earliest first), so
//! every run is reproducible.

mod batch;
mod engine;
mod error;
mod experiment;
mod frontier;
mod heuristic;
mod neighbors;
mod node;
mod strategy;

pub use batch::{BatchRun, run_batch, sample_starts};
pub use engine::{SearchOutcome, search};
pub use error::SearchError;
pub use experiment::{EXPERIMENT_PLAN, ExperimentReport, ResultRecord, run_experiment};
pub use heuristic::{Heuristic, euclidean, manhattan};
pub use neighbors::Neighbors;
pub use node::{NodeArena, NodeId, SearchNode};
pub use strategy::Strategy;
