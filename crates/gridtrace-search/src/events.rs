//! Search output types: [`SearchEvent`] and [`SearchResult`].

use gridtrace_core::Point;

/// Outcome of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Whether the end cell was reached.
    pub success: bool,
    /// On success, every coordinate from start to end inclusive, each
    /// consecutive pair adjacent. Empty on failure.
    pub path: Vec<Point>,
    /// Nodes finalized during the search, endpoints included.
    pub nodes_explored: usize,
    /// Human-readable explanation on failure.
    pub message: Option<String>,
}

/// One step of an exploration trace.
///
/// A trace yields `NodeExplored` for every finalized node other than the
/// endpoints, strictly in finalize order, and ends with a single `Done`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchEvent {
    /// A node left the frontier and was finalized.
    NodeExplored(Point),
    /// The search finished; always the last event of a trace.
    Done(SearchResult),
}
