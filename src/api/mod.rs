//! HTTP API Wrappers
//!
//! Browser `fetch` bindings for the list endpoint, organized by resource.

mod lists;

use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

// Re-export all public items
pub use lists::*;

/// Transport failures; never leave this module as errors
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no window object")]
    NoWindow,
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("response error: {0}")]
    Decode(String),
}

impl FetchError {
    fn network(err: JsValue) -> Self {
        FetchError::Network(format!("{:?}", err))
    }
}

/// GET `url` and decode the body as JSON
async fn get_json(url: &str) -> Result<serde_json::Value, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(url, &opts).map_err(FetchError::network)?;

    let response = await_promise(window.fetch_with_request(&request)).await?;
    let response: Response = response.dyn_into().map_err(FetchError::network)?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response.json().map_err(|e| FetchError::Decode(format!("{:?}", e)))?;
    let body = await_promise(body)
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))?;

    serde_wasm_bindgen::from_value(body).map_err(|e| FetchError::Decode(e.to_string()))
}

async fn await_promise(promise: js_sys::Promise) -> Result<JsValue, FetchError> {
    JsFuture::from(promise).await.map_err(FetchError::network)
}
