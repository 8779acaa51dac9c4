//! List Container Component
//!
//! Renders one box per list, with the staging list between the selected pair.

use leptos::prelude::*;

use crate::components::ListBox;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ListContainer() -> impl IntoView {
    let store = use_app_store();

    // Rebuilt from the store on every change, never cached
    let board_view = move || store.board().read().view();

    move || {
        let board = board_view();
        if board.is_empty() {
            return view! { <p>"No lists available."</p> }.into_any();
        }

        view! {
            <div class="list-container">
                {board.boxes.into_iter().map(|list| view! { <ListBox list=list /> }).collect_view()}
            </div>
        }
        .into_any()
    }
}
