//! Domain-agnostic state-space search.
//!
//! Finds a path from an initial state to a state satisfying a goal test,
//! over a state space described entirely by caller callbacks:
//!
//! - **Depth-first search (DFS)**: LIFO frontier; finds *a* path.
//! - **Breadth-first search (BFS)**: FIFO frontier; finds a path with the
//!   fewest edges.
//! - **A\***: priority frontier on `cost + heuristic`; finds a minimum-cost
//!   path under an admissible, consistent heuristic.
//! - **Containment helpers**: linear and binary membership tests over
//!   slices.
//!
//! Problems are described either by implementing [`SearchProblem`] /
//! [`InformedProblem`] and calling a runner ([`DfsRunner`], [`BfsRunner`],
//! [`AStarRunner`]) with a [`SearchConfig`], or by passing closures to
//! [`dfs`], [`bfs`], or [`astar`].
//!
//! # Architecture
//!
//! All three algorithms share one control loop (`driver`) parameterized by
//! a [`Frontier`](frontier::Frontier) and an
//! [`ExploredRegistry`](explored::ExploredRegistry). Nodes live in a
//! per-search [`NodeArena`] and point to their parents by [`NodeId`]; a
//! successful search keeps only the root-to-goal chain as a [`Solution`].
//!
//! The crate contains no domain concepts. Mazes, puzzles, and graphs are
//! defined by consumers.
//!
//! # Example
//!
//! ```
//! use u_search::heuristic::{manhattan_distance, GridPoint};
//!
//! let goal = GridPoint::new(2, 2);
//! let in_bounds = |p: &GridPoint| (0..3).contains(&p.row) && (0..3).contains(&p.column);
//! let solution = u_search::astar(
//!     GridPoint::new(0, 0),
//!     |p| *p == goal,
//!     |p| p.neighbors().into_iter().filter(in_bounds).collect(),
//!     manhattan_distance(goal),
//! )
//! .unwrap();
//! assert_eq!(solution.depth(), 4);
//! ```

pub mod astar;
pub mod bfs;
pub mod config;
pub mod contains;
pub mod dfs;
pub mod driver;
pub mod error;
pub mod explored;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod problem;

pub use astar::{astar, AStarRunner};
pub use bfs::{bfs, BfsRunner};
pub use config::SearchConfig;
pub use contains::{binary_contains, linear_contains};
pub use dfs::{dfs, DfsRunner};
pub use driver::{Algorithm, SearchResult, SearchStats, Termination};
pub use error::SearchError;
pub use node::{reconstruct_path, Node, NodeArena, NodeId, Solution};
pub use problem::{FnInformedProblem, FnProblem, InformedProblem, SearchProblem};
