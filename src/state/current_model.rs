//! Current Model View State
//!
//! State record for the current-model page. A failed load clears the model
//! so a previously deployed one is never presented as current.

use crate::api::types::ModelRun;

/// View state for the current-model page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CurrentModelState {
    /// The deployed model, when the latest load succeeded
    pub model: Option<ModelRun>,
    /// A load is outstanding
    pub loading: bool,
    /// Display message for a failed load
    pub error: Option<String>,
    /// Most recently issued request id; stale resolutions are ignored
    latest_request: u64,
}

impl CurrentModelState {
    /// Start a load.
    pub fn begin_load(&mut self) -> u64 {
        self.latest_request += 1;
        self.loading = true;
        self.error = None;
        self.latest_request
    }

    /// Apply a load outcome. Returns `false`, leaving the record untouched,
    /// when a newer request has been issued since `id`.
    pub fn resolve(&mut self, id: u64, outcome: Result<ModelRun, String>) -> bool {
        if id != self.latest_request {
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(run) => {
                self.model = Some(run);
                self.error = None;
            }
            Err(message) => {
                self.model = None;
                self.error = Some(message);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resnet() -> ModelRun {
        ModelRun {
            model_name: "resnet18".to_string(),
            trainable_parameters: 11_000_000,
            execution_time: 42.5,
            loss: 0.031,
            accuracy: 0.978,
            model_size: 45_000_000,
            learning_rate: 0.001,
            batch_size: 32,
            epochs: 20,
            optimizer: "adam".to_string(),
            email: None,
        }
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = CurrentModelState::default();
        assert_eq!(state.model, None);
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_success_sets_model() {
        let mut state = CurrentModelState::default();
        let id = state.begin_load();
        assert!(state.loading);

        assert!(state.resolve(id, Ok(resnet())));
        assert!(!state.loading);
        assert_eq!(state.model, Some(resnet()));
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_failure_clears_model() {
        let mut state = CurrentModelState::default();
        let id = state.begin_load();
        state.resolve(id, Ok(resnet()));

        let id = state.begin_load();
        assert!(state.resolve(id, Err("Server error 404: no best model".to_string())));
        assert_eq!(state.model, None);
        assert_eq!(
            state.error.as_deref(),
            Some("Server error 404: no best model")
        );
    }

    #[test]
    fn test_stale_resolution_is_discarded() {
        let mut state = CurrentModelState::default();
        let first = state.begin_load();
        let second = state.begin_load();

        assert!(!state.resolve(first, Err("Network error: offline".to_string())));
        assert_eq!(state.error, None);
        assert!(state.loading);

        assert!(state.resolve(second, Ok(resnet())));
        assert_eq!(state.model, Some(resnet()));
    }
}
