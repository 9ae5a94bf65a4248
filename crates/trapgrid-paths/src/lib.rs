//! Pathfinding algorithms for trap grids.
//!
//! This crate provides the graph-search algorithms used to route an agent
//! across a 4-connected grid:
//!
//! - **A\*** with a candidate filter and pruning counters ([`PathRange::astar_search`])
//! - **BFS** fewest-steps paths ([`PathRange::bfs_path`])
//! - **Connected Components** flood fill ([`PathRange::cc_map`])
//!
//! All algorithms operate through [`PathRange`], which owns the per-cell
//! arrays and reuses them across queries over the same bounds.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, connected components |
//! | [`WeightedPather`] : [`Pather`] | cost accounting |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//! | [`CandidateFilter`] | A* frontier admission |

mod astar;
mod bfs;
mod cc;
mod distance;
mod pathrange;
mod traits;

pub use astar::{Search, SearchStats};
pub use distance::manhattan;
pub use pathrange::PathRange;
pub use traits::{AdmitAll, AstarPather, CandidateFilter, Pather, Rejection, Verdict, WeightedPather};
