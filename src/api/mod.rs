//! API Layer
//!
//! HTTP client facade for the classification backend, plus the record
//! types and error taxonomy shared by every call.

pub mod client;
pub mod error;
pub mod types;

pub use client::{fetch_current_model, fetch_leaderboard, init, predict};
pub use error::{ApiError, ApiResult};
pub use types::{BestModelResponse, ModelRun, PredictionResult};
