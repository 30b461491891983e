//! Depth-first search.
//!
//! LIFO frontier with a presence-only explored registry. States are marked
//! when discovered, so no state is pushed twice. Successors are pushed in the
//! order the problem returns them, so the last successor is expanded first.
//!
//! DFS finds *a* path on finite spaces but gives no guarantee about its
//! length.

use std::hash::Hash;

use crate::config::SearchConfig;
use crate::driver::{drive, Algorithm, SearchResult};
use crate::error::SearchError;
use crate::explored::DiscoveredSet;
use crate::frontier::LifoFrontier;
use crate::node::Solution;
use crate::problem::{FnProblem, SearchProblem};

/// Depth-first search runner.
pub struct DfsRunner;

impl DfsRunner {
    /// Executes depth-first search on the given problem.
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
            Algorithm::DepthFirst,
            LifoFrontier::new(),
            DiscoveredSet::new(),
            |_: &P::State| 0.0,
        )
    }
}

/// Depth-first search over closures, with no expansion budget.
///
/// Returns `None` when no goal state is reachable.
///
/// # Examples
///
/// ```
/// let solution = u_search::dfs(0u32, |s| *s == 3, |s| vec![s + 1]).unwrap();
/// assert_eq!(solution.into_path(), vec![0, 1, 2, 3]);
/// ```
pub fn dfs<T, G, S>(initial: T, goal_test: G, successors: S) -> Option<Solution<T>>
where
    T: Clone + Eq + Hash,
    G: Fn(&T) -> bool,
    S: Fn(&T) -> Vec<T>,
{
    let problem = FnProblem::new(initial, goal_test, successors);
    let result = DfsRunner::run(&problem, &SearchConfig::default());
    debug_assert!(result.is_ok(), "default search config must validate");
    result.ok().and_then(SearchResult::into_solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::Termination;

    // ---- Binary tree: n -> 2n+1, 2n+2, bounded ----

    fn tree_successors(limit: u32) -> impl Fn(&u32) -> Vec<u32> {
        move |&n| {
            [2 * n + 1, 2 * n + 2]
                .into_iter()
                .filter(|&c| c <= limit)
                .collect()
        }
    }

    #[test]
    fn test_dfs_expands_last_successor_first() {
        // Tree 0 -> {1, 2}, 1 -> {3, 4}, 2 -> {5, 6}.
        // LIFO pops 2 before 1, so the right subtree is explored first.
        let problem = FnProblem::new(0u32, |_: &u32| false, tree_successors(6));
        let result = DfsRunner::run(&problem, &SearchConfig::default()).unwrap();
        assert_eq!(result.termination, Termination::FrontierExhausted);
        assert_eq!(result.stats.expanded, 7);

        let visited = std::cell::RefCell::new(Vec::new());
        let problem = FnProblem::new(
            0u32,
            |s: &u32| {
                visited.borrow_mut().push(*s);
                false
            },
            tree_successors(6),
        );
        DfsRunner::run(&problem, &SearchConfig::default()).unwrap();
        assert_eq!(*visited.borrow(), vec![0, 2, 6, 5, 1, 4, 3]);
    }

    #[test]
    fn test_dfs_finds_goal_in_tree() {
        let solution = dfs(0u32, |s| *s == 9, tree_successors(20)).unwrap();
        assert_eq!(solution.into_path(), vec![0, 1, 4, 9]);
    }

    #[test]
    fn test_dfs_no_solution() {
        assert!(dfs(0u32, |s| *s == 100, tree_successors(20)).is_none());
    }

    #[test]
    fn test_dfs_path_is_valid_on_cycle() {
        // Ring of 8 states, both directions.
        let succ = |s: &u8| vec![(s + 1) % 8, (s + 7) % 8];
        let solution = dfs(0u8, |s| *s == 5, succ).unwrap();
        let path = solution.path();
        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.last(), Some(&5));
        for w in path.windows(2) {
            assert!(succ(&w[0]).contains(&w[1]));
        }
    }

    #[test]
    fn test_dfs_respects_budget() {
        let problem = FnProblem::new(0u64, |_: &u64| false, |s: &u64| vec![s + 1]);
        let config = SearchConfig::default().with_max_expansions(100);
        let result = DfsRunner::run(&problem, &config).unwrap();
        assert_eq!(result.termination, Termination::BudgetExhausted);
        assert_eq!(result.stats.expanded, 100);
    }
}
