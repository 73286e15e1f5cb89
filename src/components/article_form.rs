//! Title + content editor shared by the create and edit pages.

use leptos::prelude::*;

use crate::components::loader::ButtonLoader;
use crate::util::validation::{CONTENT_MAX, TITLE_MAX, validate_draft, visible_error};

#[component]
pub fn ArticleForm(
    title: RwSignal<String>,
    content: RwSignal<String>,
    #[prop(into)] busy: Signal<bool>,
    submit_label: &'static str,
    busy_label: &'static str,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let title_touched = RwSignal::new(false);
    let content_touched = RwSignal::new(false);
    let errors = Memo::new(move |_| validate_draft(&title.get(), &content.get()));

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        title_touched.set(true);
        content_touched.set(true);
        if busy.get_untracked() || !errors.get_untracked().is_valid() {
            return;
        }
        on_submit.run(());
    };

    view! {
        <form class="article-form" on:submit=submit>
            <label class="form-label" for="title">"Title"</label>
            <input
                class="form-input"
                id="title"
                name="title"
                type="text"
                maxlength=TITLE_MAX.to_string()
                placeholder="Enter article title"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
                on:blur=move |_| title_touched.set(true)
            />
            <p class="form-error">
                {move || visible_error(title_touched.get(), errors.get().title)}
            </p>

            <label class="form-label" for="content">"Content"</label>
            <textarea
                class="form-input form-input--content"
                id="content"
                name="content"
                rows="15"
                maxlength=CONTENT_MAX.to_string()
                placeholder="Write your article content here..."
                prop:value=move || content.get()
                on:input=move |ev| content.set(event_target_value(&ev))
                on:blur=move |_| content_touched.set(true)
            ></textarea>
            <p class="form-counter">
                {move || format!("{} / {CONTENT_MAX}", content.with(|c| c.chars().count()))}
            </p>
            <p class="form-error">
                {move || visible_error(content_touched.get(), errors.get().content)}
            </p>

            <div class="form-actions">
                <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || busy.get() || !errors.get().is_valid()
                >
                    <Show when=move || busy.get()>
                        <ButtonLoader/>
                    </Show>
                    {move || if busy.get() { busy_label } else { submit_label }}
                </button>
            </div>
        </form>
    }
}
