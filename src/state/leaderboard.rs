//! Leaderboard View State
//!
//! State record for the leaderboard page: the fetched rows plus load
//! bookkeeping. Rows are replaced wholesale on every successful load.

use crate::api::types::ModelRun;

/// View state for the leaderboard page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeaderboardState {
    /// Rows in server order
    pub rows: Vec<ModelRun>,
    /// A load or refresh is outstanding
    pub loading: bool,
    /// Display message for a failed load
    pub error: Option<String>,
    /// Most recently issued request id; stale resolutions are ignored
    latest_request: u64,
}

impl LeaderboardState {
    /// Start a load or refresh. Existing rows stay visible while the
    /// request runs.
    pub fn begin_load(&mut self) -> u64 {
        self.latest_request += 1;
        self.loading = true;
        self.error = None;
        self.latest_request
    }

    /// Apply a load outcome. Returns `false`, leaving the record untouched,
    /// when a newer request has been issued since `id`.
    pub fn resolve(&mut self, id: u64, outcome: Result<Vec<ModelRun>, String>) -> bool {
        if id != self.latest_request {
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(rows) => {
                self.rows = rows;
                self.error = None;
            }
            Err(message) => {
                // Last good rows stay rendered beneath the notice
                self.error = Some(message);
            }
        }
        true
    }

    /// Rows paired with their 1-based display rank. Rank is recomputed from
    /// position on every call and never stored on the row itself.
    pub fn ranked_rows(&self) -> Vec<(usize, ModelRun)> {
        self.rows
            .iter()
            .cloned()
            .enumerate()
            .map(|(idx, run)| (idx + 1, run))
            .collect()
    }

    /// A failed load with no rows to fall back on. The page shows only the
    /// error notice in this case, never the "no models" empty state.
    pub fn failed_empty(&self) -> bool {
        self.rows.is_empty() && self.error.is_some()
    }
}
