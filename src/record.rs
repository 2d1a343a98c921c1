//! The extracted run record.

use serde::Serialize;

/// One run of the logged search algorithm.
///
/// Field declaration order is the CSV column order; the writer emits the
/// header from these names. Records are immutable once constructed and are
/// never deduplicated -- two runs from the same initial state are two rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunRecord {
    /// The initial state token, as logged (e.g. `1 2 3`).
    pub initial_state: String,
    /// Heuristic estimate for the initial state.
    pub h: u64,
    /// Elapsed wall-clock time in seconds.
    pub time_s: f64,
    /// Nodes expanded during the search.
    pub nodes_expanded: u64,
    /// Length of the solution found.
    pub solution_length: u64,
    /// Total cost of the solution found.
    pub total_cost: u64,
}
