//! API Record Types
//!
//! Backend-defined record shapes. These flow through the client unmodified:
//! deserialized once per fetch, held in view-local state, and only ever
//! reformatted for display (see `crate::format`).

/// One recorded training run's metadata and metrics
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct ModelRun {
    pub model_name: String,
    pub trainable_parameters: u64,
    /// Training time in minutes
    pub execution_time: f64,
    pub loss: f64,
    /// Accuracy as a fraction in [0, 1]
    pub accuracy: f64,
    /// Serialized model size in bytes
    pub model_size: u64,
    pub learning_rate: f64,
    pub batch_size: u32,
    pub epochs: u32,
    pub optimizer: String,
    /// Owner identifier; present only on leaderboard rows
    #[serde(default)]
    pub email: Option<String>,
}

/// Envelope returned by the best-model endpoint
#[derive(Clone, Debug, serde::Deserialize, PartialEq)]
pub struct BestModelResponse {
    pub model_details: ModelRun,
}

/// Classification output for one submitted image
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct PredictionResult {
    pub prediction_label: String,
    /// Confidence already scaled to 0-100 by the backend
    pub accuracy: f64,
    pub poisonous: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUN_JSON: &str = r#"{
        "model_name": "resnet18",
        "trainable_parameters": 11000000,
        "execution_time": 42.5,
        "loss": 0.031,
        "accuracy": 0.978,
        "model_size": 45000000,
        "learning_rate": 0.001,
        "batch_size": 32,
        "epochs": 20,
        "optimizer": "adam"
    }"#;

    #[test]
    fn test_decode_model_run() {
        let run: ModelRun = serde_json::from_str(RUN_JSON).unwrap();
        assert_eq!(run.model_name, "resnet18");
        assert_eq!(run.trainable_parameters, 11_000_000);
        assert_eq!(run.batch_size, 32);
        assert_eq!(run.email, None);
    }

    #[test]
    fn test_decode_leaderboard_rows_with_email() {
        let json = r#"[
            {"model_name": "model01", "trainable_parameters": 1000, "execution_time": 1.0,
             "loss": 0.5, "accuracy": 0.9, "model_size": 2000000, "learning_rate": 0.01,
             "batch_size": 16, "epochs": 5, "optimizer": "sgd", "email": "a@example.com"},
            {"model_name": "model02", "trainable_parameters": 2000, "execution_time": 2.0,
             "loss": 0.4, "accuracy": 0.95, "model_size": 3000000, "learning_rate": 0.001,
             "batch_size": 32, "epochs": 10, "optimizer": "adam", "email": "b@example.com"}
        ]"#;
        let rows: Vec<ModelRun> = serde_json::from_str(json).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].email.as_deref(), Some("a@example.com"));
        assert_eq!(rows[1].optimizer, "adam");

        // Same payload decodes to a structurally equal sequence
        let again: Vec<ModelRun> = serde_json::from_str(json).unwrap();
        assert_eq!(rows, again);
    }

    #[test]
    fn test_decode_empty_leaderboard() {
        let rows: Vec<ModelRun> = serde_json::from_str("[]").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_decode_best_model_envelope() {
        let json = format!(r#"{{"model_details": {}}}"#, RUN_JSON);
        let envelope: BestModelResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(envelope.model_details.model_name, "resnet18");
        assert_eq!(envelope.model_details.model_size, 45_000_000);
    }

    #[test]
    fn test_envelope_without_details_is_an_error() {
        let result = serde_json::from_str::<BestModelResponse>("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_prediction_ignores_extra_fields() {
        // The backend also returns the raw prediction vector and tensor shapes
        let json = r#"{
            "input_image_shape": "(1, 224, 224, 3)",
            "prediction_shape": [1, 9],
            "prediction": [[0.01, 0.88, 0.11]],
            "prediction_label": "amanita",
            "accuracy": 88.2,
            "poisonous": true
        }"#;
        let result: PredictionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.prediction_label, "amanita");
        assert_eq!(result.accuracy, 88.2);
        assert!(result.poisonous);
    }
}
