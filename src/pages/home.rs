//! Home Page
//!
//! Upload or capture a mushroom photo and see the predicted species.
//! Selecting a file is submission: the predict request goes out as soon as
//! the picker closes, with no separate submit step.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::{ErrorNotice, InlineLoading};
use crate::format;
use crate::state::predict::PredictState;

/// Upload/predict page component
#[component]
pub fn Home() -> impl IntoView {
    let state = create_rw_signal(PredictState::default());

    let on_file_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();

        if let Some(files) = input.files() {
            if let Some(file) = files.get(0) {
                let preview = match web_sys::Url::create_object_url_with_blob(&file) {
                    Ok(url) => url,
                    Err(_) => return,
                };

                let (request_id, old_preview) =
                    match state.try_update(|s| s.begin_predict(preview)) {
                        Some(begun) => begun,
                        None => return,
                    };

                // The replaced preview no longer backs any render
                if let Some(old) = old_preview {
                    let _ = web_sys::Url::revoke_object_url(&old);
                }

                spawn_local(async move {
                    let outcome = api::predict(&file).await;
                    if let Err(e) = &outcome {
                        web_sys::console::error_1(
                            &format!("Predict request failed: {}", e).into(),
                        );
                    }
                    state.try_update(|s| {
                        s.resolve(
                            request_id,
                            outcome.map_err(|e| format!("Unable to classify the image: {}", e)),
                        )
                    });
                });
            }
        }
    };

    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            // Prediction headline
            {move || {
                state.get().prediction.map(|p| {
                    let tone = format::prediction_tone(p.poisonous);
                    view! {
                        <h1 class=format!("text-3xl font-bold text-center {}", tone)>
                            {format::prediction_headline(&p)}
                            {p.poisonous.then(|| view! {
                                <span class="ml-3 align-middle text-base font-semibold bg-red-600 text-white px-3 py-1 rounded-full">
                                    "Poisonous"
                                </span>
                            })}
                        </h1>
                    }
                })
            }}

            // Recovered-error notice; the preview stays visible above it
            {move || state.get().error.map(|msg| view! { <ErrorNotice message=msg /> })}

            // In-flight indicator
            {move || {
                if state.get().in_flight {
                    view! {
                        <div class="flex items-center justify-center space-x-2 text-gray-400">
                            <InlineLoading />
                            <span>"Identifying..."</span>
                        </div>
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            // Dropzone: the label forwards clicks to the hidden file input
            <label class="block bg-gray-800 border-2 border-dashed border-gray-600 hover:border-primary-500
                          rounded-xl p-8 text-center cursor-pointer transition-colors">
                <input
                    type="file"
                    accept="image/*"
                    capture="environment"
                    class="hidden"
                    on:change=on_file_change
                />

                {move || {
                    state.get().preview_url.map(|url| view! {
                        <img src=url class="max-h-96 mx-auto rounded-lg mb-4" />
                    })
                }}

                <div class="text-gray-400">"Click to take a picture or upload..."</div>
            </label>
        </div>
    }
}
