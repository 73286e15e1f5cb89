//! Article detail page with owner-triggered AI summary generation.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::loader::{ButtonLoader, Loader};
use crate::net::gateway::Gateway;
use crate::net::types::Article;
#[cfg(feature = "hydrate")]
use crate::pages::{ArticleLookup, article_lookup};
use crate::util::format::format_long_date;
use crate::util::session::SessionContext;

#[component]
pub fn ArticleDetailPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let gateway = expect_context::<Gateway>();
    let params = use_params_map();
    let article_id = move || params.read().get("id").unwrap_or_default();

    let article = RwSignal::new(None::<Article>);
    let summary = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);
    let summarizing = RwSignal::new(false);

    Effect::new(move || {
        let id = article_id();
        if id.is_empty() {
            return;
        }
        loading.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match article_lookup(crate::net::api::get_article(gateway, &id).await) {
                ArticleLookup::Found(found) => {
                    summary.set(found.summary.clone().filter(|s| !s.trim().is_empty()));
                    article.set(Some(found));
                }
                ArticleLookup::Missing => article.set(None),
                ArticleLookup::Failed(err) => {
                    leptos::logging::warn!("loading article {id} failed: {err}");
                    session.notify_failure(&err, "Failed to fetch article", false);
                }
            }
            loading.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, gateway, session, summary);
            loading.set(false);
        }
    });

    let on_summarize = move |_| {
        if summarizing.get_untracked() || summary.with_untracked(Option::is_some) {
            return;
        }
        let Some(id) = article.with_untracked(|a| a.as_ref().map(|a| a.id.clone())) else {
            return;
        };
        summarizing.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::generate_summary(gateway, &id).await {
                Ok(text) => {
                    summary.set(Some(text));
                    session.notify_success("Summary generated successfully");
                }
                Err(err) => {
                    leptos::logging::warn!("summary for article {id} failed: {err}");
                    session.notify_failure(&err, "Failed to generate summary", false);
                }
            }
            summarizing.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            summarizing.set(false);
        }
    };

    let is_owner = move || article.with(|a| a.as_ref().is_some_and(|a| session.owns(&a.author.id)));
    let field = move |f: fn(&Article) -> String| article.with(|a| a.as_ref().map(f).unwrap_or_default());

    view! {
        <div class="detail-page">
            <Show when=move || !loading.get() fallback=|| view! { <Loader/> }>
                <Show
                    when=move || article.with(Option::is_some)
                    fallback=|| {
                        view! {
                            <div class="alert alert--error">
                                <h2>"Article Not Found"</h2>
                                <p>"The article you're looking for doesn't exist."</p>
                                <a class="btn" href="/articles">"Back to Articles"</a>
                            </div>
                        }
                    }
                >
                    <a class="detail-page__back" href="/articles">"← Back to Articles"</a>
                    <article class="detail-card">
                        <h1 class="detail-card__title">{move || field(|a| a.title.clone())}</h1>
                        <div class="detail-card__meta">
                            <span class="tag">{move || field(|a| a.author.name.clone())}</span>
                            <span>{move || field(|a| format_long_date(&a.created_at))}</span>
                        </div>

                        <section class="summary-box">
                            <div class="summary-box__header">
                                <h2>"AI Summary"</h2>
                                <Show when=is_owner>
                                    <button
                                        class="btn btn--primary"
                                        disabled=move || summarizing.get() || summary.with(Option::is_some)
                                        on:click=on_summarize
                                    >
                                        <Show when=move || summarizing.get()>
                                            <ButtonLoader/>
                                        </Show>
                                        {move || {
                                            if summary.with(Option::is_some) {
                                                "Summary Generated"
                                            } else if summarizing.get() {
                                                "Generating..."
                                            } else {
                                                "Generate Summary"
                                            }
                                        }}
                                    </button>
                                </Show>
                            </div>
                            <p class="summary-box__text">
                                {move || summary.get().unwrap_or_else(|| "No summary generated yet.".to_owned())}
                            </p>
                        </section>

                        <div class="detail-card__content">{move || field(|a| a.content.clone())}</div>
                    </article>
                </Show>
            </Show>
        </div>
    }
}
