//! Typed search errors.
//!
//! Only configuration problems are errors. A search that finds no goal is a
//! normal outcome and is reported through
//! [`Termination`](crate::driver::Termination), not through this type.

use thiserror::Error;

/// Failure detected before a search starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The supplied [`SearchConfig`](crate::config::SearchConfig) is unusable.
    #[error("invalid search config: {detail}")]
    InvalidConfig { detail: String },
}
