//! UI Components
//!
//! Leptos components for the list board.

mod button_group;
mod list_box;
mod list_container;
mod list_item;
mod status_view;

pub use button_group::ButtonGroup;
pub use list_box::ListBox;
pub use list_container::ListContainer;
pub use list_item::ListItem;
pub use status_view::{FailureView, LoadingView};
