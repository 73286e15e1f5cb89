//! Fallback for unmatched routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="alert">
            <h2>"Page not found."</h2>
            <a class="btn" href="/">"Go home"</a>
        </div>
    }
}
