//! Revision history for one article.
//!
//! The article and its revisions are fetched concurrently; both must succeed
//! for the page to render.

#[cfg(test)]
#[path = "article_history_test.rs"]
mod article_history_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::loader::Loader;
use crate::net::gateway::{ApiError, Gateway};
use crate::net::types::{Article, ArticleRevision};
use crate::pages::{ArticleLookup, article_lookup};
use crate::state::articles::sort_revisions;
use crate::util::format::{excerpt, format_long_date, format_short_date, prefix_chars};
use crate::util::session::SessionContext;

const EXCERPT_CHARS: usize = 180;

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
#[derive(Clone, Debug, PartialEq, Eq)]
enum HistoryLoad {
    Ready { article: Article, revisions: Vec<ArticleRevision> },
    Missing,
    Failed(ApiError),
}

/// Combine both fetches; revisions come back newest first.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn combine(
    article: Result<Option<Article>, ApiError>,
    revisions: Result<Vec<ArticleRevision>, ApiError>,
) -> HistoryLoad {
    match (article_lookup(article), revisions) {
        (ArticleLookup::Failed(err), _) => HistoryLoad::Failed(err),
        (ArticleLookup::Missing, _) => HistoryLoad::Missing,
        (ArticleLookup::Found(_), Err(err)) => HistoryLoad::Failed(err),
        (ArticleLookup::Found(article), Ok(mut revisions)) => {
            sort_revisions(&mut revisions);
            HistoryLoad::Ready { article, revisions }
        }
    }
}

/// `Version #3f2a1 - Title`
fn revision_modal_title(revision: &ArticleRevision) -> String {
    format!("Version #{} - {}", prefix_chars(&revision.id, 5), revision.title)
}

#[component]
pub fn ArticleHistoryPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let gateway = expect_context::<Gateway>();
    let navigate = use_navigate();
    let params = use_params_map();
    let article_id = move || params.read().get("id").unwrap_or_default();

    let article = RwSignal::new(None::<Article>);
    let revisions = RwSignal::new(Vec::<ArticleRevision>::new());
    let loading = RwSignal::new(true);
    let open_revision = RwSignal::new(None::<ArticleRevision>);
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
            let (found, history) = futures::join!(
                crate::net::api::get_article(gateway, &id),
                crate::net::api::article_history(gateway, &id)
            );
            match combine(found, history) {
                HistoryLoad::Ready { article: a, revisions: r } => {
                    leptos::logging::log!("article {id}: {} revisions", r.len());
                    article.set(Some(a));
                    revisions.set(r);
                }
                HistoryLoad::Missing => {
                    session.notify_error(crate::pages::ARTICLE_NOT_FOUND);
                    go_to.set(Some(crate::util::guard::PROTECTED_LANDING.to_owned()));
                }
                HistoryLoad::Failed(err) => {
                    leptos::logging::warn!("history for article {id} failed: {err}");
                    session.notify_failure(&err, "Failed to fetch article history", false);
                }
            }
            loading.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, gateway, session, revisions);
            loading.set(false);
        }
    });

    let on_close = move |_| open_revision.set(None);

    view! {
        <div class="history-page">
            <Show when=move || !loading.get() fallback=|| view! { <Loader/> }>
                {move || {
                    article
                        .get()
                        .map(|current| {
                            view! {
                                <a class="history-page__back" href=format!("/articles/{}", current.id)>
                                    "← Back to Article"
                                </a>
                                <h1>"Edit History"</h1>
                                <h2 class="history-page__subtitle">{current.title.clone()}</h2>

                                <div class="revision-card revision-card--current">
                                    <div class="revision-card__header">
                                        <span class="tag tag--current">"Current Version"</span>
                                        <span>
                                            {format_short_date(
                                                current.updated_at.as_deref().unwrap_or(&current.created_at),
                                            )}
                                        </span>
                                    </div>
                                    <p class="revision-card__excerpt">{excerpt(&current.content, EXCERPT_CHARS)}</p>
                                    <a class="btn btn--small" href=format!("/articles/{}", current.id)>
                                        "View Current"
                                    </a>
                                </div>
                            }
                        })
                }}
                {move || {
                    let items = revisions.get();
                    if items.is_empty() {
                        return view! {
                            <div class="alert">
                                <h2>"No Edit History"</h2>
                                <p>"This article hasn't been edited yet."</p>
                            </div>
                        }
                            .into_any();
                    }
                    let total = items.len();
                    items
                        .into_iter()
                        .enumerate()
                        .map(|(index, revision)| {
                            let number = total - index;
                            let preview = revision.clone();
                            view! {
                                <div class="revision-card">
                                    <div class="revision-card__header">
                                        <span class="tag">{format!("Version {number}")}</span>
                                        <span>{format_short_date(&revision.created_at)}</span>
                                    </div>
                                    <h3>{revision.title}</h3>
                                    <p class="revision-card__excerpt">{excerpt(&revision.content, EXCERPT_CHARS)}</p>
                                    <button
                                        class="btn btn--small"
                                        on:click=move |_| open_revision.set(Some(preview.clone()))
                                    >
                                        "View"
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </Show>

            {move || {
                open_revision
                    .get()
                    .map(|revision| {
                        view! {
                            <div class="dialog-backdrop" on:click=on_close>
                                <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                                    <h2>{revision_modal_title(&revision)}</h2>
                                    <p class="dialog__meta">{format_long_date(&revision.created_at)}</p>
                                    <div class="dialog__body">{revision.content}</div>
                                    <div class="dialog__actions">
                                        <button class="btn" on:click=on_close>
                                            "Close"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
