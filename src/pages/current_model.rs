//! Current Model Page
//!
//! Detail view of the model the backend is currently serving predictions
//! with, unwrapped from the best-model envelope.

use leptos::*;

use crate::api;
use crate::api::types::ModelRun;
use crate::components::{CardSkeleton, ErrorNotice};
use crate::format;
use crate::state::current_model::CurrentModelState;

/// Current model details page
#[component]
pub fn CurrentModel() -> impl IntoView {
    let state = create_rw_signal(CurrentModelState::default());

    // Fetch on mount
    create_effect(move |_| {
        let request_id = match state.try_update(|s| s.begin_load()) {
            Some(id) => id,
            None => return,
        };
        spawn_local(async move {
            let outcome = api::fetch_current_model().await;
            if let Err(e) = &outcome {
                web_sys::console::error_1(
                    &format!("Failed to fetch current model: {}", e).into(),
                );
            }
            state.try_update(|s| {
                s.resolve(
                    request_id,
                    outcome
                        .map(|r| r.model_details)
                        .map_err(|e| format!("Unable to load the current model: {}", e)),
                )
            });
        });
    });

    view! {
        <div class="max-w-xl mx-auto space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Current Model Details"</h1>
                <p class="text-gray-400 mt-1">"The model serving predictions right now"</p>
            </div>

            {move || state.get().error.map(|msg| view! { <ErrorNotice message=msg /> })}

            {move || {
                let s = state.get();
                if s.loading {
                    view! { <CardSkeleton /> }.into_view()
                } else {
                    s.model.map(|run| view! { <ModelDetailTable run=run /> }).into_view()
                }
            }}
        </div>
    }
}

/// Two-column detail table for one model run
#[component]
fn ModelDetailTable(run: ModelRun) -> impl IntoView {
    let rows = vec![
        ("Name", run.model_name),
        ("Trainable Parameters", format::thousands(run.trainable_parameters)),
        ("Training Time (mins)", format::execution_minutes(run.execution_time)),
        ("Loss", run.loss.to_string()),
        ("Accuracy", format::accuracy_percentage(run.accuracy)),
        ("Model Size (Mb)", format::size_mb(run.model_size)),
        ("Learning Rate", run.learning_rate.to_string()),
        ("Batch Size", run.batch_size.to_string()),
        ("Epochs", run.epochs.to_string()),
        ("Optimizer", run.optimizer),
    ];

    view! {
        <div class="bg-gray-800 rounded-xl overflow-hidden">
            <table class="w-full text-sm">
                <tbody>
                    {rows.into_iter().map(|(label, value)| view! {
                        <tr class="border-b border-gray-700 last:border-0">
                            <td class="px-4 py-3 font-semibold">{label}</td>
                            <td class="px-4 py-3 text-gray-300">{value}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
