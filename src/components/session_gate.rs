//! Holds back routed content until the session is known and the route allowed.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once inside the router. It resolves the stored session on first
//! client render, then keeps the route guard installed for the lifetime of the
//! app. Until then (and on the server, where effects never run) only the
//! loader is rendered, so neither class of route flashes content that is
//! about to be redirected away.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loader::Loader;
use crate::util::guard::{install_route_guard, redirect_for};
use crate::util::session::SessionContext;

#[component]
pub fn SessionGate(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || session.resolve());
    install_route_guard(session, move || location.pathname.get(), navigate);

    let settled = move || {
        session.state.with(|s| s.is_resolved() && redirect_for(s.is_authenticated(), &location.pathname.get()).is_none())
    };

    view! {
        <Show when=settled fallback=|| view! { <Loader/> }>
            {children()}
        </Show>
    }
}
