//! Status Views
//!
//! Full-page views shown while loading and after a failed load.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn LoadingView() -> impl IntoView {
    view! {
        <div class="loader-container" data-testid="loader">
            <div class="spinner"></div>
        </div>
    }
}

/// Shown when the lists could not be fetched or had the wrong shape
#[component]
pub fn FailureView() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="error-view">
            <div class="error-image" aria-label="failure view">"⚠"</div>
            <p>"Something went wrong. Please try again."</p>
            <button class="create-btn" on:click=move |_| ctx.reload()>
                "Try Again"
            </button>
        </div>
    }
}
