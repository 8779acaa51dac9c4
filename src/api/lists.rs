//! Lists Endpoint
//!
//! Fail-soft source for the lists document.

use async_trait::async_trait;
use list_board::ListSource;
use serde_json::Value;

use super::get_json;

/// [`ListSource`] backed by the configured HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpListSource {
    url: String,
}

impl HttpListSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl ListSource for HttpListSource {
    async fn fetch_document(&self) -> Option<Value> {
        match get_json(&self.url).await {
            Ok(document) => {
                web_sys::console::log_1(&format!("[API] Fetched Data: {}", document).into());
                Some(document)
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[API] Error fetching lists from {}: {}", self.url, e).into());
                None
            }
        }
    }
}
