//! Error Notice Component
//!
//! Neutral per-view "unable to load" block, rendered in place by whichever
//! page owns the failed request. The rest of the shell stays usable.

use leptos::*;

/// Recovered-error notice
#[component]
pub fn ErrorNotice(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-3 bg-red-900/40 border border-red-700 text-red-200 px-4 py-3 rounded-lg">
            <span class="text-lg">"✕"</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}
