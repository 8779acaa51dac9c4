//! Global Application State Store
//!
//! Uses Leptos reactive_stores so components re-render from the single
//! `ListBoard` the store owns.

use leptos::prelude::*;
use reactive_stores::Store;
use serde_json::Value;

use list_board::{BoardError, Item, ItemId, ListBoard, ListLabel};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Lists, selection and staging state
    pub board: ListBoard,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

fn log_rejected(op: &str, err: &BoardError) {
    web_sys::console::log_1(&format!("[STORE] {} rejected: {}", op, err).into());
}

pub fn store_begin_load(store: &AppStore) {
    store.board().write().begin_load();
}

/// Apply a fetched document (`None` when the source failed)
pub fn store_finish_load(store: &AppStore, document: Option<Value>) {
    match store.board().write().finish_load(document.as_ref()) {
        Ok(count) => web_sys::console::log_1(&format!("[STORE] Loaded {} items", count).into()),
        Err(e) => web_sys::console::error_1(&format!("[STORE] Error loading lists: {}", e).into()),
    }
}

pub fn store_toggle_selection(store: &AppStore, label: u32) {
    store.board().write().toggle_selection(label);
}

pub fn store_create_staging(store: &AppStore) {
    if let Err(e) = store.board().write().request_create_staging() {
        log_rejected("create list", &e);
    }
}

pub fn store_move_item(store: &AppStore, id: ItemId, target: ListLabel) {
    if let Err(e) = store.board().write().move_item(id, target) {
        log_rejected("move", &e);
    }
}

pub fn store_cancel(store: &AppStore) {
    store.board().write().cancel();
}

/// Close the staging list and log the resulting arrangement
pub fn store_commit(store: &AppStore) {
    let committed = store.board().write().commit();
    match committed {
        Ok(items) => match arrangement_message(&items) {
            Ok(msg) => web_sys::console::log_1(&msg.into()),
            Err(e) => web_sys::console::error_1(
                &format!("[STORE] Error serializing updated lists: {}", e).into(),
            ),
        },
        Err(e) => log_rejected("update", &e),
    }
}

fn arrangement_message(items: &[Item]) -> Result<String, serde_json::Error> {
    Ok(format!("[STORE] Updated lists: {}", serde_json::to_string(items)?))
}
