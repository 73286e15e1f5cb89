//! # sharewise
//!
//! Leptos + WASM frontend for ShareWise, a knowledge-sharing platform where
//! signed-in users publish articles, browse each other's work, review edit
//! history and request AI summaries from the backend.
//!
//! Two pieces hold the app together: the session guard (`util::session`,
//! `util::guard`), which resolves the stored credential once and keeps
//! routes consistent with it, and the request gateway (`net::gateway`),
//! the single HTTP path that normalizes failures and expires the session
//! when the backend rejects it. Pages, components, state models and wire
//! types sit on top of those.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialised");
    }
    leptos::mount::hydrate_body(app::App);
}
