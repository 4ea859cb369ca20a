//! Mushroom Identifier
//!
//! Web client for a mushroom-image-classification service, built with
//! Leptos (WASM).
//!
//! # Features
//!
//! - Upload or capture a photo and see the predicted species and toxicity
//! - Leaderboard of submitted model runs
//! - Details of the currently deployed model
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All classification, training, and ranking logic lives in an
//! external HTTP backend; the client renders state and issues three calls.

use leptos::*;

mod api;
mod app;
mod components;
mod format;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // One-time client setup before anything mounts
    api::init();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
