//! List Source
//!
//! Abstract read-only endpoint that yields the lists document.

use async_trait::async_trait;
use serde_json::Value;

use crate::item::Item;
use crate::payload::items_or_empty;

/// Where the lists document comes from
///
/// Implementations never fail: transport and decode problems are logged by the
/// implementation and reported as `None`.
#[async_trait(?Send)]
pub trait ListSource {
    async fn fetch_document(&self) -> Option<Value>;
}

/// Fetch the item collection, yielding an empty collection on any failure
pub async fn fetch_items<S: ListSource + ?Sized>(source: &S) -> Vec<Item> {
    let document = source.fetch_document().await;
    items_or_empty(document.as_ref())
}
