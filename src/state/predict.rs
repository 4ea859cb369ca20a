//! Upload/Predict View State
//!
//! State record for the home page, held in a page-local signal. All
//! transitions are pure so they can be tested without a browser.

use crate::api::types::PredictionResult;

/// View state for the upload/predict page.
///
/// Selecting a file is submission: `begin_predict` swaps in the preview and
/// hands out a request id, and every asynchronous completion goes through
/// [`PredictState::resolve`] with that id. Outcomes that lost the race
/// against a newer selection are discarded, so the latest selected image
/// always wins no matter which response arrives last.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictState {
    /// Object URL previewing the most recently chosen file
    pub preview_url: Option<String>,
    /// Classification from the most recently resolved request
    pub prediction: Option<PredictionResult>,
    /// Display message for a failed request
    pub error: Option<String>,
    /// A predict request is outstanding
    pub in_flight: bool,
    /// Most recently issued request id; stale resolutions are ignored
    latest_request: u64,
}

impl PredictState {
    /// Record a new file selection. Returns the request id to resolve with
    /// and the replaced preview URL so the caller can revoke it. The
    /// previous prediction stays visible until the request resolves.
    pub fn begin_predict(&mut self, preview_url: String) -> (u64, Option<String>) {
        self.latest_request += 1;
        self.in_flight = true;
        self.error = None;
        let old = self.preview_url.replace(preview_url);
        (self.latest_request, old)
    }

    /// Apply a request outcome. Returns `false`, leaving the record
    /// untouched, when a newer request has been issued since `id`.
    pub fn resolve(&mut self, id: u64, outcome: Result<PredictionResult, String>) -> bool {
        if id != self.latest_request {
            return false;
        }
        self.in_flight = false;
        match outcome {
            Ok(prediction) => {
                self.prediction = Some(prediction);
                self.error = None;
            }
            Err(message) => {
                // A label from an older image must not sit next to the new preview
                self.prediction = None;
                self.error = Some(message);
            }
        }
        true
    }
}
