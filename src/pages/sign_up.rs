//! Account registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loader::ButtonLoader;
use crate::components::password_input::PasswordInput;
use crate::net::gateway::Gateway;
use crate::net::types::SignUpRequest;
use crate::util::session::SessionContext;
use crate::util::validation::{validate_sign_up, visible_error};

#[component]
pub fn SignUpPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let gateway = expect_context::<Gateway>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    // name, email, password, confirm
    let touched = RwSignal::new([false; 4]);
    let busy = RwSignal::new(false);
    let signed_up_to = RwSignal::new(None::<&'static str>);

    let errors = Memo::new(move |_| {
        validate_sign_up(&name.get(), &email.get(), &password.get(), &confirm_password.get())
    });
    let touch = move |field: usize| touched.update(|t| t[field] = true);
    let is_touched = move |field: usize| touched.with(|t| t[field]);

    Effect::new(move || {
        if let Some(target) = signed_up_to.get() {
            signed_up_to.set(None);
            navigate(target, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        touched.set([true; 4]);
        if busy.get_untracked() || !errors.get_untracked().is_valid() {
            return;
        }
        let body = SignUpRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::sign_up(gateway, &body).await {
                Ok(response) => {
                    for field in [name, email, password, confirm_password] {
                        field.set(String::new());
                    }
                    signed_up_to.set(Some(session.sign_in(&response, "Signup successful")));
                }
                Err(err) => {
                    leptos::logging::warn!("sign-up failed: {err}");
                    session.notify_error(&super::auth_failure_text(&err, "Signup failed"));
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
                <h1 class="auth-card__title">"Create Account"</h1>
                <p class="auth-card__subtitle">"Join ShareWise to share and summarize knowledge"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="form-label" for="name">"Name"</label>
                    <input
                        class="form-input"
                        id="name"
                        name="name"
                        type="text"
                        placeholder="Enter your name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        on:blur=move |_| touch(0)
                    />
                    <p class="form-error">{move || visible_error(is_touched(0), errors.get().name)}</p>

                    <label class="form-label" for="email">"Email"</label>
                    <input
                        class="form-input"
                        id="email"
                        name="email"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        on:blur=move |_| touch(1)
                    />
                    <p class="form-error">{move || visible_error(is_touched(1), errors.get().email)}</p>

                    <label class="form-label" for="password">"Password"</label>
                    <PasswordInput
                        id="password"
                        placeholder="Create a password"
                        value=password
                        on_blur=Callback::new(move |()| touch(2))
                    />
                    <p class="form-error">{move || visible_error(is_touched(2), errors.get().password)}</p>

                    <label class="form-label" for="confirmPassword">"Confirm Password"</label>
                    <PasswordInput
                        id="confirmPassword"
                        placeholder="Repeat your password"
                        value=confirm_password
                        on_blur=Callback::new(move |()| touch(3))
                    />
                    <p class="form-error">
                        {move || visible_error(is_touched(3), errors.get().confirm_password)}
                    </p>

                    <button
                        class="btn btn--primary auth-form__submit"
                        type="submit"
                        disabled=move || busy.get() || !errors.get().is_valid()
                    >
                        <Show when=move || busy.get()>
                            <ButtonLoader/>
                        </Show>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? " <a href="/">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
