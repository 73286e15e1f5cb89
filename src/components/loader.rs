//! Loading indicators.

use leptos::prelude::*;

/// Full-area spinner shown while a page or the session is resolving.
#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader-page">
            <span class="spinner" role="progressbar" aria-label="Loading"></span>
        </div>
    }
}

/// Inline spinner placed inside a busy submit button.
#[component]
pub fn ButtonLoader() -> impl IntoView {
    view! { <span class="button-loader" aria-hidden="true"></span> }
}
