//! HTTP plumbing with timeout support.
//!
//! All REST traffic funnels through [`request`], which races every fetch
//! against a timeout using `Promise.race`.

use js_sys::{Array, Promise};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::api::error::ApiError;
use crate::config::FETCH_TIMEOUT_MS;

/// HTTP method of a backend request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout.
///
/// # Returns
/// * `RaceResult::Completed` if promise resolves before timeout
/// * `RaceResult::TimedOut` if timeout occurs first
/// * `RaceResult::Error` if promise rejects
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Timeout promise resolves to undefined, distinguishing it from any
    // fetch result.
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

// =============================================================================
// Request Functions
// =============================================================================

/// Issue a request and return the response body as text.
///
/// A `Some(body)` is sent as a JSON body. Non-2xx responses map to
/// `ApiError::HttpError`.
pub async fn request(method: Method, url: &str, body: Option<String>) -> Result<String, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method(method.as_str());
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|_| ApiError::RequestCreationFailed)?;

    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(ApiError::Timeout),
        RaceResult::Error(msg) => Err(ApiError::NetworkError(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result.dyn_into().map_err(|_| ApiError::InvalidContent)?;

            if !resp.ok() {
                return Err(ApiError::HttpError(resp.status()));
            }

            let text = JsFuture::from(resp.text().map_err(|_| ApiError::ResponseReadFailed)?)
                .await
                .map_err(|_| ApiError::ResponseReadFailed)?;

            text.as_string().ok_or(ApiError::InvalidContent)
        }
    }
}

/// Issue a request and parse the response body as JSON.
pub async fn request_json<T: DeserializeOwned>(
    method: Method,
    url: &str,
    body: Option<String>,
) -> Result<T, ApiError> {
    let text = request(method, url, body).await?;
    serde_json::from_str(&text).map_err(|e| ApiError::JsonParseError(e.to_string()))
}

/// Fetch and parse JSON from a URL.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    request_json(Method::Get, url, None).await
}
