//! Leaderboard Page
//!
//! Table of every submitted model run, one row per entry, in the order the
//! server returns them.

use leptos::*;

use crate::api;
use crate::api::types::ModelRun;
use crate::components::{ErrorNotice, TableSkeleton};
use crate::format;
use crate::state::leaderboard::LeaderboardState;

/// Leaderboard page component
#[component]
pub fn Leaderboard() -> impl IntoView {
    let state = create_rw_signal(LeaderboardState::default());

    let load = move || {
        let request_id = match state.try_update(|s| s.begin_load()) {
            Some(id) => id,
            None => return,
        };
        spawn_local(async move {
            let outcome = api::fetch_leaderboard().await;
            if let Err(e) = &outcome {
                web_sys::console::error_1(
                    &format!("Failed to fetch leaderboard: {}", e).into(),
                );
            }
            state.try_update(|s| {
                s.resolve(
                    request_id,
                    outcome.map_err(|e| format!("Unable to load the leaderboard: {}", e)),
                )
            });
        });
    };

    // Fetch on mount
    create_effect(move |_| load());

    view! {
        <div class="space-y-6">
            // Header with refresh
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Leaderboard"</h1>
                    <p class="text-gray-400 mt-1">"Model runs submitted by participants"</p>
                </div>

                <button
                    on:click=move |_| load()
                    disabled=move || state.get().loading
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 disabled:bg-gray-800
                           rounded-lg font-medium transition-colors"
                >
                    {move || if state.get().loading { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>

            // A failed refresh leaves the last good rows visible below
            {move || state.get().error.map(|msg| view! { <ErrorNotice message=msg /> })}

            {move || {
                let s = state.get();
                if s.loading && s.rows.is_empty() {
                    view! { <TableSkeleton /> }.into_view()
                } else if s.failed_empty() {
                    // Nothing below the notice until a load has succeeded
                    view! {}.into_view()
                } else {
                    view! { <LeaderboardTable rows=s.ranked_rows() /> }.into_view()
                }
            }}
        </div>
    }
}

/// Leaderboard table, one row per submitted run
#[component]
fn LeaderboardTable(rows: Vec<(usize, ModelRun)>) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl overflow-x-auto">
            <table class="w-full text-sm">
                <thead>
                    <tr class="border-b border-gray-700 text-left text-gray-400">
                        <th class="px-4 py-3"></th>
                        <th class="px-4 py-3">"User"</th>
                        <th class="px-4 py-3">"Model"</th>
                        <th class="px-4 py-3">"Trainable Parameters"</th>
                        <th class="px-4 py-3">"Training Time (mins)"</th>
                        <th class="px-4 py-3">"Loss"</th>
                        <th class="px-4 py-3">"Accuracy"</th>
                        <th class="px-4 py-3">"Model Size (Mb)"</th>
                        <th class="px-4 py-3">"Learning Rate"</th>
                        <th class="px-4 py-3">"Batch Size"</th>
                        <th class="px-4 py-3">"Epochs"</th>
                        <th class="px-4 py-3">"Optimizer"</th>
                    </tr>
                </thead>
                <tbody>
                    {if rows.is_empty() {
                        view! {
                            <tr>
                                <td colspan="12" class="px-4 py-8 text-center text-gray-400">
                                    "No models submitted yet."
                                </td>
                            </tr>
                        }.into_view()
                    } else {
                        rows.into_iter().map(|(rank, run)| view! {
                            <tr class="border-b border-gray-700 last:border-0 hover:bg-gray-750">
                                <td class="px-4 py-3 text-gray-400">{rank}</td>
                                <td class="px-4 py-3">{run.email.unwrap_or_default()}</td>
                                <td class="px-4 py-3">{run.model_name}</td>
                                <td class="px-4 py-3">{format::thousands(run.trainable_parameters)}</td>
                                <td class="px-4 py-3">{format::execution_minutes(run.execution_time)}</td>
                                <td class="px-4 py-3">{run.loss}</td>
                                <td class="px-4 py-3">{format::accuracy_percentage(run.accuracy)}</td>
                                <td class="px-4 py-3">{format::size_mb(run.model_size)}</td>
                                <td class="px-4 py-3">{run.learning_rate}</td>
                                <td class="px-4 py-3">{run.batch_size}</td>
                                <td class="px-4 py-3">{run.epochs}</td>
                                <td class="px-4 py-3">{run.optimizer}</td>
                            </tr>
                        }).collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
