//! Search configuration.

use crate::error::SearchError;

/// Configuration shared by all search runners.
///
/// The defaults reproduce plain DFS / BFS / A*: no expansion cap and stale
/// A* frontier entries re-examined when popped.
///
/// # Examples
///
/// ```
/// use u_search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_max_expansions(10_000)
///     .with_skip_stale(true);
/// assert_eq!(config.max_expansions, Some(10_000));
/// assert!(config.skip_stale);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Hard cap on node expansions (`None` for unbounded).
    ///
    /// Reaching the cap ends the search with
    /// [`Termination::BudgetExhausted`](crate::driver::Termination::BudgetExhausted).
    pub max_expansions: Option<usize>,
    /// A* only: discard a popped node whose cost exceeds the best cost
    /// recorded for its state instead of re-examining it.
    ///
    /// Changes which of several equal-cost paths may be returned, never the
    /// cost of the path.
    pub skip_stale: bool,
}

impl SearchConfig {
    /// Sets the expansion cap.
    pub fn with_max_expansions(mut self, n: usize) -> Self {
        self.max_expansions = Some(n);
        self
    }

    /// Removes the expansion cap.
    pub fn unbounded(mut self) -> Self {
        self.max_expansions = None;
        self
    }

    /// Enables or disables stale-entry skipping for A*.
    pub fn with_skip_stale(mut self, skip: bool) -> Self {
        self.skip_stale = skip;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidConfig`] if `max_expansions` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidConfig {
                detail: "max_expansions must be positive or None".into(),
            });
        }
        Ok(())
    }
}
