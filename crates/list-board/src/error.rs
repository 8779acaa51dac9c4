//! Board Errors
//!
//! Every fallible board operation reports one of these.

use thiserror::Error;

use crate::item::ItemId;
use crate::label::ListLabel;

/// Message shown inline when "create" is requested without exactly two lists selected
pub const SELECTION_COUNT_MESSAGE: &str = "You should select exactly 2 lists to create a new list";

/// Common result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The source produced nothing (transport or decode failure upstream)
    #[error("list source unavailable")]
    Unavailable,

    /// The document did not match `{ "lists": [ { id, name, description, list_number } ] }`
    #[error("malformed response: {0}")]
    MalformedResponseShape(String),

    #[error("{} ({selected} selected)", SELECTION_COUNT_MESSAGE)]
    InvalidSelectionCount { selected: usize },

    #[error("lists are not loaded")]
    NotReady,

    #[error("the new list is not open")]
    StagingInactive,

    #[error("no item with id {0}")]
    UnknownItem(ItemId),

    #[error("item {id} cannot move from {from} to {to}")]
    IllegalMove {
        id: ItemId,
        from: ListLabel,
        to: ListLabel,
    },
}
