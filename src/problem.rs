//! Core traits for search problems.

use std::hash::Hash;

/// Defines a state-space search problem.
///
/// The user implements the initial state, the goal test, and the successor
/// function. The search framework handles frontier ordering, deduplication,
/// and path reconstruction.
///
/// All methods are called sequentially on the calling thread and must be
/// referentially stable for the duration of one search: the same state must
/// always yield the same goal verdict and the same successors.
///
/// # Examples
///
/// ```
/// use u_search::SearchProblem;
///
/// /// Count from 0 up to a target, one step at a time.
/// struct CountTo(u32);
///
/// impl SearchProblem for CountTo {
///     type State = u32;
///
///     fn initial_state(&self) -> u32 { 0 }
///     fn is_goal(&self, state: &u32) -> bool { *state == self.0 }
///     fn successors(&self, state: &u32) -> Vec<u32> { vec![state + 1] }
/// }
/// ```
pub trait SearchProblem {
    /// A point in the search space.
    type State: Clone + Eq + Hash;

    /// The state the search starts from.
    fn initial_state(&self) -> Self::State;

    /// Whether `state` is an acceptable solution.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// States reachable from `state` in one step.
    fn successors(&self, state: &Self::State) -> Vec<Self::State>;
}

/// A search problem with a heuristic estimate of the remaining cost.
///
/// A* returns a minimum-cost path when the heuristic is admissible (never
/// overestimates) and consistent. With an inadmissible heuristic it still
/// terminates on finite spaces but may return a suboptimal path.
pub trait InformedProblem: SearchProblem {
    /// Estimated cost from `state` to the nearest goal.
    ///
    /// Must be non-negative and not NaN.
    fn heuristic(&self, state: &Self::State) -> f64;
}

/// Adapts an initial state plus goal and successor closures into a
/// [`SearchProblem`].
pub struct FnProblem<T, G, S> {
    initial: T,
    goal_test: G,
    successors: S,
}

impl<T, G, S> FnProblem<T, G, S>
where
    T: Clone + Eq + Hash,
    G: Fn(&T) -> bool,
    S: Fn(&T) -> Vec<T>,
{
    pub fn new(initial: T, goal_test: G, successors: S) -> Self {
        Self {
            initial,
            goal_test,
            successors,
        }
    }

    /// Attaches a heuristic, producing an [`InformedProblem`].
    pub fn with_heuristic<H>(self, heuristic: H) -> FnInformedProblem<T, G, S, H>
    where
        H: Fn(&T) -> f64,
    {
        FnInformedProblem {
            inner: self,
            heuristic,
        }
    }
}

impl<T, G, S> SearchProblem for FnProblem<T, G, S>
where
    T: Clone + Eq + Hash,
    G: Fn(&T) -> bool,
    S: Fn(&T) -> Vec<T>,
{
    type State = T;

    fn initial_state(&self) -> T {
        self.initial.clone()
    }

    fn is_goal(&self, state: &T) -> bool {
        (self.goal_test)(state)
    }

    fn successors(&self, state: &T) -> Vec<T> {
        (self.successors)(state)
    }
}

/// [`FnProblem`] plus a heuristic closure.
pub struct FnInformedProblem<T, G, S, H> {
    inner: FnProblem<T, G, S>,
    heuristic: H,
}

impl<T, G, S, H> SearchProblem for FnInformedProblem<T, G, S, H>
where
    T: Clone + Eq + Hash,
    G: Fn(&T) -> bool,
    S: Fn(&T) -> Vec<T>,
    H: Fn(&T) -> f64,
{
    type State = T;

    fn initial_state(&self) -> T {
        self.inner.initial_state()
    }

    fn is_goal(&self, state: &T) -> bool {
        self.inner.is_goal(state)
    }

    fn successors(&self, state: &T) -> Vec<T> {
        self.inner.successors(state)
    }
}

impl<T, G, S, H> InformedProblem for FnInformedProblem<T, G, S, H>
where
    T: Clone + Eq + Hash,
    G: Fn(&T) -> bool,
    S: Fn(&T) -> Vec<T>,
    H: Fn(&T) -> f64,
{
    fn heuristic(&self, state: &T) -> f64 {
        (self.heuristic)(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_problem_delegates() {
        let problem = FnProblem::new(1u32, |s: &u32| *s == 3, |s: &u32| vec![s + 1, s * 2]);
        assert_eq!(problem.initial_state(), 1);
        assert!(problem.is_goal(&3));
        assert!(!problem.is_goal(&2));
        assert_eq!(problem.successors(&2), vec![3, 4]);
    }

    #[test]
    fn test_with_heuristic_keeps_problem() {
        let problem = FnProblem::new(0i32, |s: &i32| *s == 5, |s: &i32| vec![s + 1])
            .with_heuristic(|s: &i32| f64::from(5 - s));
        assert_eq!(problem.initial_state(), 0);
        assert!(problem.is_goal(&5));
        assert_eq!(problem.successors(&4), vec![5]);
        assert!((problem.heuristic(&2) - 3.0).abs() < 1e-12);
    }
}
