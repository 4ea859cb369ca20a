//! Pages
//!
//! Top-level page components for each route.

pub mod home;
pub mod leaderboard;
pub mod current_model;

pub use home::Home;
pub use leaderboard::Leaderboard;
pub use current_model::CurrentModel;
