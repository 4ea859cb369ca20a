//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod nav;
pub mod loading;
pub mod error_notice;

pub use nav::Nav;
pub use loading::{CardSkeleton, InlineLoading, TableSkeleton};
pub use error_notice::ErrorNotice;
