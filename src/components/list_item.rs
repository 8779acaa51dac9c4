//! List Item Component
//!
//! Item row with its two text fields and the arrows allowed for its list.

use leptos::prelude::*;

use list_board::{Direction, EntryView, ItemContent, ListLabel};

use crate::store::{store_move_item, use_app_store};

#[component]
pub fn ListItem(entry: EntryView) -> impl IntoView {
    let store = use_app_store();

    let ItemContent::Valid { name, description } = entry.content.clone() else {
        return view! { <p class="error-text">"Invalid item"</p> }.into_any();
    };

    let id = entry.id;
    let arrow = move |direction: Direction, target: Option<ListLabel>| {
        target.map(|target| {
            let class = match direction {
                Direction::Left => "arrow-btn left-arrow",
                Direction::Right => "arrow-btn right-arrow",
            };
            view! {
                <button class=class on:click=move |_| store_move_item(&store, id, target)>
                    {direction.glyph()}
                </button>
            }
        })
    };

    let buttons = entry.has_arrows().then(|| view! {
        <div class="list-item-buttons">
            {arrow(Direction::Left, entry.target(Direction::Left))}
            {arrow(Direction::Right, entry.target(Direction::Right))}
        </div>
    });

    view! {
        <div class="list-item">
            <p>{name}</p>
            <p>{description}</p>
            {buttons}
        </div>
    }
    .into_any()
}
