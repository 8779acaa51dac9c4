//! List Creation App
//!
//! Root component: loads the lists and switches between the loading,
//! failure and board views.

use leptos::prelude::*;
use leptos::task::spawn_local;

use list_board::{ListSource, Phase};

use crate::api::HttpListSource;
use crate::components::{ButtonGroup, FailureView, ListContainer, LoadingView};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{store_begin_load, store_finish_load, use_app_store, AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = reactive_stores::Store::new(AppState::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), AppConfig::from_env());

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load on mount and on every retry
    Effect::new(move |_| {
        let attempt = reload_trigger.get();
        let source = HttpListSource::new(ctx.lists_url());
        web_sys::console::log_1(&format!("[APP] Loading lists, attempt={}", attempt).into());
        store_begin_load(&store);
        spawn_local(async move {
            let document = source.fetch_document().await;
            store_finish_load(&store, document);
        });
    });

    let phase = Memo::new(move |_| store.board().read().phase().clone());

    view! {
        <div class="home-container">
            {move || match phase.get() {
                Phase::Loading => view! { <LoadingView /> }.into_any(),
                Phase::Failed(_) => view! { <FailureView /> }.into_any(),
                Phase::Ready => view! { <BoardPage /> }.into_any(),
            }}
        </div>
    }
}

/// Heading, inline selection error, controls and list boxes
#[component]
fn BoardPage() -> impl IntoView {
    let store = use_app_store();
    let selection_error = move || store.board().read().selection_error().map(str::to_string);

    view! {
        <h1>"List Creation"</h1>
        {move || selection_error().map(|msg| view! { <p class="error-message">{msg}</p> })}
        <ButtonGroup />
        <ListContainer />
    }
}
