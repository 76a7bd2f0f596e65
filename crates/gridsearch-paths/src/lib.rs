//! Uninformed search over a direction-restricted grid.
//!
//! This crate provides six classic search strategies that share one
//! neighbor order and differ only in their frontier discipline:
//!
//! - **Breadth-first** ([`Explorer::bfs`]) — FIFO queue, fewest moves
//! - **Depth-first** ([`Explorer::dfs`]) — LIFO stack
//! - **Uniform-cost** ([`Explorer::ucs`]) — priority queue on path cost
//! - **Depth-limited** ([`Explorer::dls`]) — depth-tagged stack
//! - **Iterative deepening** ([`Explorer::iddfs`]) — repeated depth-limited runs
//! - **Bidirectional** ([`Explorer::bidirectional`]) — two FIFO queues
//!
//! Movement is restricted to six of the eight surrounding cells
//! ([`RESTRICTED_DIRS`]): up-right and down-left are not moves.
//!
//! Every search reports each newly recorded coordinate through a blocking
//! `FnMut(Step)` callback before it continues, so a caller can watch the
//! exploration order step by step.

mod algorithm;
mod bfs;
mod bidir;
mod dfs;
mod dls;
mod explorer;
mod frontier;
mod neighbors;
mod record;
mod traits;
mod ucs;

#[cfg(test)]
mod testgrid;

pub use algorithm::{Algorithm, DEFAULT_DLS_LIMIT, DEFAULT_MAX_DEPTH, ParseAlgorithmError};
pub use explorer::{Explorer, SearchStats, Step};
pub use frontier::{Discipline, Frontier, Queued};
pub use neighbors::{
    DOWN, DOWN_RIGHT, LEFT, Neighbors, RESTRICTED_DIRS, RIGHT, UP, UP_LEFT, get_neighbors,
    is_adjacent,
};
pub use record::{Visit, VisitRecord, join_paths};
pub use traits::Pather;
pub use ucs::STEP_COST;
