//! Create-article page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::article_form::ArticleForm;
use crate::net::gateway::Gateway;
use crate::net::types::ArticleDraft;
use crate::util::guard::PROTECTED_LANDING;
use crate::util::session::SessionContext;

#[component]
pub fn NewArticlePage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let gateway = expect_context::<Gateway>();
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let go_to = RwSignal::new(None::<String>);

    Effect::new(move || {
        if let Some(target) = go_to.get() {
            go_to.set(None);
            navigate(&target, NavigateOptions::default());
        }
    });

    let on_cancel = Callback::new(move |()| go_to.set(Some(PROTECTED_LANDING.to_owned())));
    let on_submit = Callback::new(move |()| {
        let draft = ArticleDraft { title: title.get_untracked(), content: content.get_untracked() };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_article(gateway, &draft).await {
                Ok(()) => {
                    session.notify_success("Article created successfully");
                    go_to.set(Some(PROTECTED_LANDING.to_owned()));
                }
                Err(err) => {
                    leptos::logging::warn!("create article failed: {err}");
                    session.notify_failure(&err, "Failed to create article", false);
                }
            }
            busy.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft, gateway, session);
            busy.set(false);
        }
    });

    view! {
        <div class="editor-page">
            <div class="page-header">
                <h1>"Create New Article"</h1>
            </div>
            <ArticleForm
                title=title
                content=content
                busy=busy
                submit_label="Create Article"
                busy_label="Creating..."
                on_submit=on_submit
                on_cancel=on_cancel
            />
        </div>
    }
}
