//! Explored registries: which states have been discovered, and at what cost.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Suppresses redundant node creation during a search.
pub trait ExploredRegistry<T> {
    /// Records `state` as reached at `cost` if it should get a new node.
    ///
    /// Returns `true` when the caller must push a node for `state`, `false`
    /// when the discovery is redundant and must be dropped.
    fn admit(&mut self, state: &T, cost: f64) -> bool;

    /// Lowest cost recorded for `state`, or `None` if the registry does not
    /// track costs or has never seen it.
    fn best_cost(&self, state: &T) -> Option<f64>;

    /// Whether a node popped at `cost` has since been superseded by a
    /// cheaper one for the same state.
    fn is_stale(&self, state: &T, cost: f64) -> bool {
        self.best_cost(state).is_some_and(|best| cost > best)
    }

    /// Number of distinct states recorded.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Presence-only registry for uninformed search.
///
/// States are recorded when first discovered, so a state is never admitted
/// twice regardless of cost.
#[derive(Debug, Clone)]
pub struct DiscoveredSet<T> {
    seen: HashSet<T>,
}

impl<T: Eq + Hash> DiscoveredSet<T> {
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }
}

impl<T: Eq + Hash> Default for DiscoveredSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash> ExploredRegistry<T> for DiscoveredSet<T> {
    fn admit(&mut self, state: &T, _cost: f64) -> bool {
        if self.seen.contains(state) {
            return false;
        }
        self.seen.insert(state.clone())
    }

    fn best_cost(&self, _state: &T) -> Option<f64> {
        None
    }

    fn len(&self) -> usize {
        self.seen.len()
    }
}

/// Best-known-cost registry for informed search.
///
/// A state is admitted again only when reached strictly more cheaply than
/// any cost recorded for it so far.
#[derive(Debug, Clone)]
pub struct BestCostMap<T> {
    best: HashMap<T, f64>,
}

impl<T: Eq + Hash> BestCostMap<T> {
    pub fn new() -> Self {
        Self {
            best: HashMap::new(),
        }
    }
}

impl<T: Eq + Hash> Default for BestCostMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash> ExploredRegistry<T> for BestCostMap<T> {
    fn admit(&mut self, state: &T, cost: f64) -> bool {
        if let Some(recorded) = self.best.get_mut(state) {
            if *recorded > cost {
                *recorded = cost;
                return true;
            }
            return false;
        }
        self.best.insert(state.clone(), cost);
        true
    }

    fn best_cost(&self, state: &T) -> Option<f64> {
        self.best.get(state).copied()
    }

    fn len(&self) -> usize {
        self.best.len()
    }
}
