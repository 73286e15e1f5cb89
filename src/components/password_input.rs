//! Password field with a visibility toggle.

use leptos::prelude::*;

#[component]
pub fn PasswordInput(
    id: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    on_blur: Callback<()>,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <div class="password-input">
            <input
                class="form-input"
                id=id
                name=id
                type=move || if visible.get() { "text" } else { "password" }
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:blur=move |_| on_blur.run(())
            />
            <button
                class="password-input__toggle"
                type="button"
                title=move || if visible.get() { "Hide password" } else { "Show password" }
                on:click=move |_| visible.update(|v| *v = !*v)
            >
                {move || if visible.get() { "Hide" } else { "Show" }}
            </button>
        </div>
    }
}
