//! Item Entity
//!
//! A named entry that belongs to exactly one list.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::label::ListLabel;

/// Unique item identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        ItemId(id)
    }
}

/// An item as delivered by the list source
///
/// Only `list_number` ever changes after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub list_number: ListLabel,
}

/// What an item row can display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemContent {
    Valid { name: String, description: String },
    /// Name or description missing or blank
    Invalid,
}

impl Item {
    pub fn new(id: u64, name: &str, description: &str, list_number: ListLabel) -> Self {
        Self {
            id: ItemId(id),
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            list_number,
        }
    }

    pub fn content(&self) -> ItemContent {
        match (non_empty(&self.name), non_empty(&self.description)) {
            (Some(name), Some(description)) => ItemContent::Valid {
                name: name.to_string(),
                description: description.to_string(),
            },
            _ => ItemContent::Invalid,
        }
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
