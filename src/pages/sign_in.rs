//! Sign-in page, served at the public landing route.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loader::ButtonLoader;
use crate::components::password_input::PasswordInput;
use crate::net::gateway::Gateway;
use crate::net::types::SignInRequest;
use crate::util::session::SessionContext;
use crate::util::validation::{validate_sign_in, visible_error};

#[component]
pub fn SignInPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let gateway = expect_context::<Gateway>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_touched = RwSignal::new(false);
    let password_touched = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let signed_in_to = RwSignal::new(None::<&'static str>);

    let errors = Memo::new(move |_| validate_sign_in(&email.get(), &password.get()));

    Effect::new(move || {
        if let Some(target) = signed_in_to.get() {
            signed_in_to.set(None);
            navigate(target, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        email_touched.set(true);
        password_touched.set(true);
        if busy.get_untracked() || !errors.get_untracked().is_valid() {
            return;
        }
        let body = SignInRequest { email: email.get_untracked(), password: password.get_untracked() };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::sign_in(gateway, &body).await {
                Ok(response) => {
                    email.set(String::new());
                    password.set(String::new());
                    signed_in_to.set(Some(session.sign_in(&response, "Signin successful")));
                }
                Err(err) => {
                    leptos::logging::warn!("sign-in failed: {err}");
                    session.notify_error(&super::auth_failure_text(&err, "Signin failed"));
                }
            }
            busy.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (body, gateway, session);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to continue to ShareWise"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="form-label" for="email">"Email"</label>
                    <input
                        class="form-input"
                        id="email"
                        name="email"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        on:blur=move |_| email_touched.set(true)
                    />
                    <p class="form-error">{move || visible_error(email_touched.get(), errors.get().email)}</p>

                    <label class="form-label" for="password">"Password"</label>
                    <PasswordInput
                        id="password"
                        placeholder="Enter your password"
                        value=password
                        on_blur=Callback::new(move |()| password_touched.set(true))
                    />
                    <p class="form-error">
                        {move || visible_error(password_touched.get(), errors.get().password)}
                    </p>

                    <button
                        class="btn btn--primary auth-form__submit"
                        type="submit"
                        disabled=move || busy.get() || !errors.get().is_valid()
                    >
                        <Show when=move || busy.get()>
                            <ButtonLoader/>
                        </Show>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? " <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
