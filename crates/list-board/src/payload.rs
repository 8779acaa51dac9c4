//! Response Payload
//!
//! Schema for the document returned by the list source.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{BoardError, BoardResult};
use crate::item::Item;

/// `{ "lists": [ { "id", "name", "description", "list_number" }, ... ] }`
#[derive(Debug, Clone, Deserialize)]
pub struct ListsPayload {
    pub lists: Vec<Item>,
}

impl ListsPayload {
    /// Validate a decoded document against the schema
    pub fn from_value(document: &Value) -> BoardResult<Self> {
        if !document.get("lists").map_or(false, Value::is_array) {
            return Err(BoardError::MalformedResponseShape(
                "expected a `lists` array".to_string(),
            ));
        }

        let payload = Self::deserialize(document)
            .map_err(|e| BoardError::MalformedResponseShape(e.to_string()))?;

        let mut seen = HashSet::with_capacity(payload.lists.len());
        if let Some(dup) = payload.lists.iter().find(|item| !seen.insert(item.id)) {
            return Err(BoardError::MalformedResponseShape(format!(
                "duplicate item id {}",
                dup.id
            )));
        }

        Ok(payload)
    }
}

/// Fail-soft view of a fetched document: anything unusable becomes no items
pub fn items_or_empty(document: Option<&Value>) -> Vec<Item> {
    let Some(document) = document else {
        return Vec::new();
    };
    match ListsPayload::from_value(document) {
        Ok(payload) => payload.lists,
        Err(e) => {
            tracing::warn!(error = %e, "discarding unusable list document");
            Vec::new()
        }
    }
}
