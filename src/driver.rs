//! The control loop shared by every search algorithm.
//!
//! # Algorithm
//!
//! 1. Register the initial state and push the root node
//! 2. Pop the next node according to the frontier's ordering:
//!    a. (A* with `skip_stale`) drop it if a cheaper node for its state exists
//!    b. If its state satisfies the goal test, stop and return it
//!    c. Otherwise expand it: for each successor admitted by the explored
//!       registry, allocate a child node and push it
//! 3. Stop with "not found" when the frontier empties, or when the
//!    expansion budget runs out
//!
//! DFS, BFS, and A* differ only in the frontier, the registry, and whether
//! edges carry unit cost plus a heuristic.

use tracing::{debug, trace};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::explored::ExploredRegistry;
use crate::frontier::Frontier;
use crate::node::{NodeArena, Solution};
use crate::problem::SearchProblem;

/// Which search policy a run used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    DepthFirst,
    BreadthFirst,
    AStar,
}

impl Algorithm {
    /// Short lowercase name, used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
            Self::AStar => "astar",
        }
    }

    /// Whether edges carry unit cost and nodes carry a heuristic.
    pub fn is_informed(self) -> bool {
        matches!(self, Self::AStar)
    }
}

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// A popped node satisfied the goal test.
    GoalReached,
    /// Every reachable state was examined without reaching a goal.
    FrontierExhausted,
    /// `max_expansions` was reached before a goal was popped.
    BudgetExhausted,
}

/// Counters collected during one search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes whose successors were generated.
    pub expanded: usize,
    /// Successor states returned by the problem, duplicates included.
    pub generated: usize,
    /// Successors dropped by the explored registry.
    pub duplicates_suppressed: usize,
    /// Popped nodes discarded as stale (A* with `skip_stale` only).
    pub stale_skipped: usize,
    /// Nodes allocated, root included.
    pub nodes_created: usize,
    /// Largest frontier size observed.
    pub frontier_high_water: usize,
}

/// Result of a search run.
#[derive(Debug, Clone)]
pub struct SearchResult<T> {
    /// The root-to-goal chain (if a goal was reached).
    pub solution: Option<Solution<T>>,
    /// Why the search stopped.
    pub termination: Termination,
    /// Search counters.
    pub stats: SearchStats,
}

impl<T> SearchResult<T> {
    /// Returns `true` if the search terminated because a goal was reached.
    pub fn is_goal_reached(&self) -> bool {
        self.termination == Termination::GoalReached
    }

    /// Discards the statistics and returns the solution, if any.
    pub fn into_solution(self) -> Option<Solution<T>> {
        self.solution
    }
}

/// Evaluates the heuristic, rejecting values that would corrupt the
/// frontier ordering.
fn checked_heuristic<T, H: Fn(&T) -> f64>(heuristic: &H, state: &T) -> f64 {
    let h = heuristic(state);
    assert!(h >= 0.0, "heuristic must be non-negative and not NaN, got {h}");
    h
}

/// Runs the search loop with the given frontier and registry.
///
/// `heuristic` is only consulted when `algorithm` is informed.
///
/// # Errors
///
/// Returns [`SearchError::InvalidConfig`] if `config` fails validation.
///
/// # Panics
///
/// Panics if `heuristic` returns a negative or NaN value.
pub(crate) fn drive<P, F, R, H>(
    problem: &P,
    config: &SearchConfig,
    algorithm: Algorithm,
    mut frontier: F,
    mut registry: R,
    heuristic: H,
) -> Result<SearchResult<P::State>, SearchError>
where
    P: SearchProblem,
    F: Frontier,
    R: ExploredRegistry<P::State>,
    H: Fn(&P::State) -> f64,
{
    config.validate()?;

    let informed = algorithm.is_informed();
    let step_cost = if informed { 1.0 } else { 0.0 };
    let estimate = |state: &P::State| {
        if informed {
            checked_heuristic(&heuristic, state)
        } else {
            0.0
        }
    };

    debug!(
        algorithm = algorithm.as_str(),
        max_expansions = ?config.max_expansions,
        skip_stale = config.skip_stale,
        "search started"
    );

    let mut arena = NodeArena::new();
    let mut stats = SearchStats::default();

    let initial = problem.initial_state();
    let root_h = estimate(&initial);
    registry.admit(&initial, 0.0);
    let root = arena.push_root(initial, root_h);
    frontier.push(root, root_h);

    let mut goal = None;
    let termination = loop {
        let Some(current_id) = frontier.pop() else {
            break Termination::FrontierExhausted;
        };
        let current = arena.get(current_id);

        if config.skip_stale && registry.is_stale(current.state(), current.cost()) {
            stats.stale_skipped += 1;
            trace!(
                node = current_id.index(),
                cost = current.cost(),
                best_cost = ?registry.best_cost(current.state()),
                "skipping stale node"
            );
            continue;
        }

        if problem.is_goal(current.state()) {
            goal = Some(current_id);
            break Termination::GoalReached;
        }

        if config
            .max_expansions
            .is_some_and(|max| stats.expanded >= max)
        {
            break Termination::BudgetExhausted;
        }

        let successors = problem.successors(current.state());
        let child_cost = current.cost() + step_cost;
        stats.expanded += 1;
        stats.generated += successors.len();
        trace!(
            node = current_id.index(),
            depth = current.depth(),
            f_cost = current.f_cost(),
            successors = successors.len(),
            frontier = frontier.len(),
            "expanding node"
        );

        for child in successors {
            if !registry.admit(&child, child_cost) {
                stats.duplicates_suppressed += 1;
                continue;
            }
            let h = estimate(&child);
            let id = arena.push_child(current_id, child, child_cost, h);
            frontier.push(id, child_cost + h);
        }
    };

    stats.nodes_created = arena.len();
    stats.frontier_high_water = frontier.high_water();

    debug!(
        algorithm = algorithm.as_str(),
        termination = ?termination,
        expanded = stats.expanded,
        generated = stats.generated,
        duplicates_suppressed = stats.duplicates_suppressed,
        stale_skipped = stats.stale_skipped,
        nodes_created = stats.nodes_created,
        frontier_high_water = stats.frontier_high_water,
        "search finished"
    );

    Ok(SearchResult {
        solution: goal.map(|id| arena.into_solution(id)),
        termination,
        stats,
    })
}
