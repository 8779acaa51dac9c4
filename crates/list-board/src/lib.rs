//! List Board
//!
//! State behind the list creation UI: two existing lists are selected, a
//! staging list is opened between them, and items move through it until the
//! arrangement is committed or cancelled.
//!
//! This crate has no browser dependencies; the Leptos frontend wraps
//! [`ListBoard`] in a store and renders [`BoardView`].

mod board;
mod error;
mod item;
mod label;
pub mod payload;
mod source;
mod view;

pub use board::{Action, ListBoard, Phase, StagingPair};
pub use error::{BoardError, BoardResult, SELECTION_COUNT_MESSAGE};
pub use item::{Item, ItemContent, ItemId};
pub use label::{Direction, ListLabel, STAGING_WIRE_NAME};
pub use payload::{items_or_empty, ListsPayload};
pub use source::{fetch_items, ListSource};
pub use view::{group_by_list, BoardView, EntryView, ListBoxView, ListGroup};
