//! Button Group Component
//!
//! Create / Cancel / Update controls above the lists.

use leptos::prelude::*;

use crate::store::{store_cancel, store_commit, store_create_staging, use_app_store, AppStateStoreFields};

#[component]
pub fn ButtonGroup() -> impl IntoView {
    let store = use_app_store();
    let staging_visible = move || store.board().read().is_staging_visible();

    view! {
        <div class="button-group">
            <button class="create-btn" on:click=move |_| store_create_staging(&store)>
                "Create a new list"
            </button>
            <Show when=staging_visible>
                <button class="cancel-btn" on:click=move |_| store_cancel(&store)>
                    "Cancel"
                </button>
                <button class="update-btn" on:click=move |_| store_commit(&store)>
                    "Update"
                </button>
            </Show>
        </div>
    }
}
