//! List Box Component
//!
//! A single list: header with selection checkbox and title, then its items.

use leptos::prelude::*;

use list_board::{ListBoxView, ListLabel};

use crate::components::ListItem;
use crate::store::{store_toggle_selection, use_app_store};

#[component]
pub fn ListBox(list: ListBoxView) -> impl IntoView {
    let store = use_app_store();
    let ListBoxView { label, title, selectable, checked, entries } = list;

    let box_class = if label.is_staging() { "list-box staging" } else { "list-box" };

    let checkbox = match (selectable, label) {
        (true, ListLabel::Numbered(n)) => Some(view! {
            <input
                type="checkbox"
                class="list-checkbox"
                prop:checked=checked
                on:change=move |_| store_toggle_selection(&store, n)
            />
        }),
        _ => None,
    };

    view! {
        <div class=box_class>
            <div class="list-header">
                {checkbox}
                <h3>{title}</h3>
            </div>
            <div class="list-items">
                {entries.into_iter().map(|entry| view! { <ListItem entry=entry /> }).collect_view()}
            </div>
        </div>
    }
}
