//! HTTP API Client
//!
//! Functions for communicating with the classification backend REST API.
//! Three endpoints, all independent and at-most-once per call: no retries,
//! no timeouts, no caching.

use gloo_net::http::Request;

use crate::api::error::{ApiError, ApiResult};
use crate::api::types::{BestModelResponse, ModelRun, PredictionResult};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:9000";

/// Local storage key that overrides the API base URL
pub const API_URL_STORAGE_KEY: &str = "mushroom_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_URL_STORAGE_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// One-time application setup, called from `main` before the app mounts.
pub fn init() {
    // Any client initialization logic comes here
}

/// Fetch all submitted model runs, in the order the server returns them.
/// An empty list is a valid result, not an error.
pub async fn fetch_leaderboard() -> ApiResult<Vec<ModelRun>> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/leaderboard", api_base))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(server_error(response).await);
    }

    response
        .json::<Vec<ModelRun>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the currently deployed model. A backend with no current model
/// answers with an error status or an empty envelope; both surface as
/// errors here, never as a missing-but-ok result.
pub async fn fetch_current_model() -> ApiResult<BestModelResponse> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/best_model", api_base))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(server_error(response).await);
    }

    response
        .json::<BestModelResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Submit one image for classification as a multipart form with a single
/// `file` field. No client-side validation of type or size; the backend
/// decides what it accepts. The browser supplies the multipart boundary,
/// so no Content-Type header is set here.
pub async fn predict(file: &web_sys::File) -> ApiResult<PredictionResult> {
    let api_base = get_api_base();

    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("could not build form data".to_string()))?;
    form.append_with_blob("file", file)
        .map_err(|_| ApiError::Network("could not attach file".to_string()))?;

    let response = Request::post(&format!("{}/predict", api_base))
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(server_error(response).await);
    }

    response
        .json::<PredictionResult>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Build a `Server` error from a non-2xx response.
async fn server_error(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.ok();

    ApiError::Server {
        status,
        message: error_message(status_text, body),
    }
}

/// Pick the display message for a failed response. The backend is
/// FastAPI-shaped, so failures usually carry a JSON `{"detail": ...}` body;
/// fall back to the raw body, then to the status text.
fn error_message(status_text: String, body: Option<String>) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        detail: String,
    }

    match body {
        Some(body) if !body.is_empty() => match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed.detail,
            Err(_) => body,
        },
        _ => status_text,
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn storage() -> web_sys::Storage {
        web_sys::window().unwrap().local_storage().unwrap().unwrap()
    }

    #[wasm_bindgen_test]
    fn api_base_defaults_when_unset() {
        storage().remove_item(API_URL_STORAGE_KEY).unwrap();
        assert_eq!(get_api_base(), DEFAULT_API_BASE);
    }

    #[wasm_bindgen_test]
    fn api_base_override_is_normalized() {
        storage()
            .set_item(API_URL_STORAGE_KEY, "http://api.example.test:9000/")
            .unwrap();
        assert_eq!(get_api_base(), "http://api.example.test:9000");
        storage().remove_item(API_URL_STORAGE_KEY).unwrap();
    }
}
