//! Events emitted by the search controller.
//!
//! These represent the observable side effects of query changes and
//! lookup completions. Subscribers receive them through a
//! [`tokio::sync::broadcast`] channel; see
//! [`SearchController::subscribe`](crate::SearchController::subscribe).

/// An observable state change in the search controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The query value was replaced. Emitted before the lookup for the
    /// new value is issued.
    QueryChanged { query: String },

    /// A lookup completed for the latest issued query and its result
    /// replaced the result set wholesale.
    ResultsUpdated {
        query: String,
        /// Number of works in the new result set.
        count: usize,
    },

    /// A lookup failed. The result set was left untouched.
    LookupFailed {
        query: String,
        /// Human-readable description of the underlying failure.
        error: String,
    },

    /// A lookup completed after its query had been superseded; its
    /// result was discarded without touching the result set.
    StaleLookupDropped { query: String },
}
