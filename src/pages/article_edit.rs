//! Edit-article page. Loads the article, prefills the form and saves changes.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::article_form::ArticleForm;
use crate::components::loader::Loader;
use crate::net::gateway::Gateway;
use crate::net::types::ArticleDraft;
#[cfg(feature = "hydrate")]
use crate::pages::{ARTICLE_NOT_FOUND, ArticleLookup, article_lookup};
use crate::util::guard::PROTECTED_LANDING;
use crate::util::session::SessionContext;

#[component]
pub fn EditArticlePage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let gateway = expect_context::<Gateway>();
    let navigate = use_navigate();
    let params = use_params_map();
    let article_id = move || params.read().get("id").unwrap_or_default();

    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let loaded = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let go_to = RwSignal::new(None::<String>);

    Effect::new(move || {
        if let Some(target) = go_to.get() {
            go_to.set(None);
            navigate(&target, NavigateOptions::default());
        }
    });

    Effect::new(move || {
        let id = article_id();
        if id.is_empty() {
            return;
        }
        loading.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match article_lookup(crate::net::api::get_article(gateway, &id).await) {
                ArticleLookup::Found(article) => {
                    title.set(article.title);
                    content.set(article.content);
                    loaded.set(true);
                }
                ArticleLookup::Missing => {
                    session.notify_error(ARTICLE_NOT_FOUND);
                    go_to.set(Some(PROTECTED_LANDING.to_owned()));
                }
                ArticleLookup::Failed(err) => {
                    leptos::logging::warn!("loading article {id} failed: {err}");
                    session.notify_failure(&err, "Failed to fetch article", false);
                }
            }
            loading.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, gateway, session);
            loading.set(false);
        }
    });

    let on_cancel = Callback::new(move |()| go_to.set(Some(format!("/articles/{}", article_id()))));
    let on_submit = Callback::new(move |()| {
        let id = params.read_untracked().get("id").unwrap_or_default();
        let draft = ArticleDraft { title: title.get_untracked(), content: content.get_untracked() };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_article(gateway, &id, &draft).await {
                Ok(()) => {
                    session.notify_success("Article updated successfully");
                    go_to.set(Some(PROTECTED_LANDING.to_owned()));
                }
                Err(err) => {
                    leptos::logging::warn!("update of article {id} failed: {err}");
                    session.notify_failure(&err, "Failed to update article", false);
                }
            }
            busy.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, draft, gateway, session);
            busy.set(false);
        }
    });

    view! {
        <div class="editor-page">
            <Show when=move || !loading.get() fallback=|| view! { <Loader/> }>
                <Show
                    when=move || loaded.get()
                    fallback=|| {
                        view! {
                            <div class="alert alert--error">
                                <h2>"Article Not Found"</h2>
                                <p>"The article you're trying to edit doesn't exist."</p>
                                <a class="btn" href=PROTECTED_LANDING>"Back to Articles"</a>
                            </div>
                        }
                    }
                >
                    <div class="page-header">
                        <h1>"Edit Article"</h1>
                    </div>
                    <ArticleForm
                        title=title
                        content=content
                        busy=busy
                        submit_label="Update Article"
                        busy_label="Updating..."
                        on_submit=on_submit
                        on_cancel=on_cancel
                    />
                </Show>
            </Show>
        </div>
    }
}
