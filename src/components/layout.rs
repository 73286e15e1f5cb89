//! Application chrome: header, footer, logout confirmation and notices.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::toaster::Toaster;
use crate::util::session::SessionContext;

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();

    let confirm_logout = RwSignal::new(false);
    let logged_out_to = RwSignal::new(None::<&'static str>);

    let on_logout_cancel = Callback::new(move |()| confirm_logout.set(false));
    let on_logout_confirm = Callback::new(move |()| {
        confirm_logout.set(false);
        logged_out_to.set(Some(session.logout()));
    });

    Effect::new(move || {
        if let Some(target) = logged_out_to.get() {
            logged_out_to.set(None);
            navigate(target, NavigateOptions::default());
        }
    });

    let user_name = move || session.user().map(|u| u.name).unwrap_or_default();

    view! {
        <div class="app-layout">
            <header class="app-header">
                <a class="app-header__brand" href="/">
                    <span class="app-header__title">"ShareWise"</span>
                    <span class="app-header__tagline">"Knowledge Sharing Platform with AI Summarization"</span>
                </a>
                <span class="app-header__spacer"></span>
                <Show when=move || session.is_authenticated()>
                    <span class="app-header__user">{user_name}</span>
                    <button class="btn app-header__logout" on:click=move |_| confirm_logout.set(true)>
                        "Logout"
                    </button>
                </Show>
            </header>

            <main class="app-main">{children()}</main>

            <footer class="app-footer">"ShareWise - Knowledge Sharing Platform"</footer>

            <Show when=move || confirm_logout.get()>
                <ConfirmDialog
                    title="Confirm Logout"
                    message="Are you sure you want to log out?"
                    confirm_label="Logout"
                    danger=true
                    on_confirm=on_logout_confirm
                    on_cancel=on_logout_cancel
                />
            </Show>
            <Toaster/>
        </div>
    }
}
