//! State Management
//!
//! Per-view state records with pure transition methods. Each page holds its
//! record in a local signal; views never read each other's state and there
//! is no shared store.

pub mod current_model;
pub mod leaderboard;
pub mod predict;

pub use current_model::CurrentModelState;
pub use leaderboard::LeaderboardState;
pub use predict::PredictState;
