//! Breadth-first search.
//!
//! FIFO frontier with a presence-only explored registry. All states at depth
//! `d` are enqueued before any state at depth `d + 1` is dequeued, so every
//! state is first discovered at its minimum edge depth and the returned path
//! has the fewest possible edges.

use std::hash::Hash;

use crate::config::SearchConfig;
use crate::driver::{drive, Algorithm, SearchResult};
use crate::error::SearchError;
use crate::explored::DiscoveredSet;
use crate::frontier::FifoFrontier;
use crate::node::Solution;
use crate::problem::{FnProblem, SearchProblem};

/// Breadth-first search runner.
pub struct BfsRunner;

impl BfsRunner {
    /// Executes breadth-first search on the given problem.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidConfig`] if `config` fails validation.
    pub fn run<P: SearchProblem>(
        problem: &P,
        config: &SearchConfig,
    ) -> Result<SearchResult<P::State>, SearchError> {
        drive(
            problem,
            config,
            Algorithm::BreadthFirst,
            FifoFrontier::new(),
            DiscoveredSet::new(),
            |_: &P::State| 0.0,
        )
    }
}

/// Breadth-first search over closures, with no expansion budget.
///
/// Returns `None` when no goal state is reachable.
///
/// # Examples
///
/// ```
/// // Reach 10 from 1 using "+1" and "*2" moves.
/// let solution = u_search::bfs(1u32, |s| *s == 10, |s| vec![s + 1, s * 2]).unwrap();
/// assert_eq!(solution.depth(), 4);
/// ```
pub fn bfs<T, G, S>(initial: T, goal_test: G, successors: S) -> Option<Solution<T>>
where
    T: Clone + Eq + Hash,
    G: Fn(&T) -> bool,
    S: Fn(&T) -> Vec<T>,
{
    let problem = FnProblem::new(initial, goal_test, successors);
    let result = BfsRunner::run(&problem, &SearchConfig::default());
    debug_assert!(result.is_ok(), "default search config must validate");
    result.ok().and_then(SearchResult::into_solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::Termination;

    #[test]
    fn test_bfs_finds_fewest_edges() {
        // Long way round: 0 -> 1 -> 2 -> 3 -> 4; shortcut 0 -> 4 listed last.
        let succ = |s: &u32| match *s {
            0 => vec![1, 4],
            1 => vec![2],
            2 => vec![3],
            3 => vec![4],
            _ => vec![],
        };
        let solution = bfs(0u32, |s| *s == 4, succ).unwrap();
        assert_eq!(solution.into_path(), vec![0, 4]);
    }

    #[test]
    fn test_bfs_discovers_states_in_layer_order() {
        let order = std::cell::RefCell::new(Vec::new());
        let problem = FnProblem::new(
            0u32,
            |s: &u32| {
                order.borrow_mut().push(*s);
                false
            },
            |&n: &u32| {
                [2 * n + 1, 2 * n + 2]
                    .into_iter()
                    .filter(|&c| c <= 6)
                    .collect()
            },
        );
        let result = BfsRunner::run(&problem, &SearchConfig::default()).unwrap();
        assert_eq!(result.termination, Termination::FrontierExhausted);
        assert_eq!(*order.borrow(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_bfs_doubling_example() {
        // 1 -> 2 -> 4 -> 5 -> 10 (or 1 -> 2 -> 4 -> 8 -> ... is longer).
        let solution = bfs(1u32, |s| *s == 10, |s| vec![s + 1, s * 2]).unwrap();
        assert_eq!(solution.depth(), 4);
        assert_eq!(solution.path().first(), Some(&1));
        assert_eq!(solution.path().last(), Some(&10));
    }

    #[test]
    fn test_bfs_no_solution() {
        let succ = |s: &i32| if *s < 5 { vec![s + 1] } else { vec![] };
        assert!(bfs(0i32, |s| *s < 0, succ).is_none());
    }

    #[test]
    fn test_bfs_stats_count_duplicates() {
        // Complete graph on 4 vertices.
        let problem = FnProblem::new(
            0u8,
            |_: &u8| false,
            |s: &u8| (0..4).filter(|v| v != s).collect(),
        );
        let result = BfsRunner::run(&problem, &SearchConfig::default()).unwrap();
        assert_eq!(result.stats.expanded, 4);
        assert_eq!(result.stats.generated, 12);
        assert_eq!(result.stats.nodes_created, 4);
        assert_eq!(result.stats.duplicates_suppressed, 9);
        assert_eq!(result.stats.frontier_high_water, 3);
    }
}
