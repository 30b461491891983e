//! Informed (A*) search.
//!
//! Priority frontier ordered by ascending `f = cost + heuristic`, ties broken
//! by insertion order. Every edge costs exactly 1; the heuristic does all
//! cost shaping. The explored registry keeps the lowest cost at which each
//! state has been pushed, and a state is pushed again only when reached
//! strictly more cheaply.
//!
//! With an admissible, consistent heuristic the first goal node popped has
//! minimum cost. Superseded (stale) nodes stay in the frontier and are
//! re-examined when popped unless [`SearchConfig::skip_stale`] is set.
//!
//! # Reference
//!
//! Hart, P. E., Nilsson, N. J., Raphael, B. (1968). "A Formal Basis for the
//! Heuristic Determination of Minimum Cost Paths", *IEEE Transactions on
//! Systems Science and Cybernetics* 4(2), 100-107.

use std::hash::Hash;

use crate::config::SearchConfig;
use crate::driver::{drive, Algorithm, SearchResult};
use crate::error::SearchError;
use crate::explored::BestCostMap;
use crate::frontier::PriorityFrontier;
use crate::node::Solution;
use crate::problem::{FnProblem, InformedProblem};

/// A* search runner.
pub struct AStarRunner;

impl AStarRunner {
    /// Executes A* on the given problem.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidConfig`] if `config` fails validation.
    ///
    /// # Panics
    ///
    /// Panics if the problem's heuristic returns a negative or NaN value.
    pub fn run<P: InformedProblem>(
        problem: &P,
        config: &SearchConfig,
    ) -> Result<SearchResult<P::State>, SearchError> {
        drive(
            problem,
            config,
            Algorithm::AStar,
            PriorityFrontier::new(),
            BestCostMap::new(),
            |state: &P::State| problem.heuristic(state),
        )
    }
}

/// A* over closures, with no expansion budget and stale nodes re-examined.
///
/// Returns `None` when no goal state is reachable.
///
/// # Panics
///
/// Panics if `heuristic` returns a negative or NaN value.
///
/// # Examples
///
/// ```
/// // Walk along a line from 0 to 7; distance to 7 is a perfect heuristic.
/// let solution = u_search::astar(
///     0i32,
///     |s| *s == 7,
///     |s| vec![s - 1, s + 1],
///     |s| f64::from((7 - s).abs()),
/// )
/// .unwrap();
/// assert_eq!(solution.cost(), 7.0);
/// ```
pub fn astar<T, G, S, H>(
    initial: T,
    goal_test: G,
    successors: S,
    heuristic: H,
) -> Option<Solution<T>>
where
    T: Clone + Eq + Hash,
    G: Fn(&T) -> bool,
    S: Fn(&T) -> Vec<T>,
    H: Fn(&T) -> f64,
{
    let problem = FnProblem::new(initial, goal_test, successors).with_heuristic(heuristic);
    let result = AStarRunner::run(&problem, &SearchConfig::default());
    debug_assert!(result.is_ok(), "default search config must validate");
    result.ok().and_then(SearchResult::into_solution)
}
