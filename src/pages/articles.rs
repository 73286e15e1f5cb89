//! Article list: search, sort, pagination and owner actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the protected landing route. The full list is fetched once on
//! mount and after each delete; everything else (search, sort, paging) runs
//! locally over `ArticleListState`.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::loader::Loader;
use crate::net::gateway::Gateway;
use crate::net::types::Article;
use crate::state::articles::{ArticleListState, PAGE_SIZES};
use crate::util::format::format_short_date;
use crate::util::session::SessionContext;

#[component]
pub fn ArticleListPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let gateway = expect_context::<Gateway>();

    let list = RwSignal::new(ArticleListState::default());
    let pending_delete = RwSignal::new(None::<String>);

    Effect::new(move || fetch_articles(gateway, session, list));

    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        if let Some(id) = pending_delete.get_untracked() {
            pending_delete.set(None);
            delete_article(gateway, session, list, id);
        }
    });

    view! {
        <div class="articles-page">
            <div class="page-header">
                <h1>"Knowledge Articles"</h1>
                <a class="btn btn--primary" href="/articles/new">"Create Article"</a>
            </div>

            <input
                class="form-input articles-page__search"
                type="search"
                placeholder="Search articles by title, content, or author..."
                prop:value=move || list.with(|s| s.search.clone())
                on:input=move |ev| list.update(|s| s.set_search(event_target_value(&ev)))
            />

            <Show when=move || !list.with(|s| s.loading) fallback=|| view! { <Loader/> }>
                <table class="articles-table">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Author"</th>
                            <th>
                                <button
                                    class="articles-table__sort"
                                    title="Sort by created date"
                                    on:click=move |_| list.update(ArticleListState::toggle_sort)
                                >
                                    "Created "
                                    {move || list.with(|s| s.sort.arrow())}
                                </button>
                            </th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = list.with(ArticleListState::visible);
                            if rows.is_empty() {
                                return view! {
                                    <tr>
                                        <td class="articles-table__empty" colspan="4">"No articles found"</td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            rows.into_iter()
                                .map(|article| view! { <ArticleRow article=article session=session pending_delete=pending_delete/> })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                    </tbody>
                </table>

                <div class="pagination">
                    <span class="pagination__range">{move || list.with(ArticleListState::range_label)}</span>
                    <select
                        class="pagination__size"
                        on:change=move |ev| {
                            if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                                list.update(|s| s.set_page_size(size));
                            }
                        }
                    >
                        {PAGE_SIZES
                            .iter()
                            .map(|&size| {
                                view! {
                                    <option
                                        value=size.to_string()
                                        selected=move || list.with(|s| s.page_size == size)
                                    >
                                        {format!("{size} / page")}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <button
                        class="btn"
                        disabled=move || list.with(|s| s.page == 0)
                        on:click=move |_| list.update(ArticleListState::prev_page)
                    >
                        "Previous"
                    </button>
                    <button
                        class="btn"
                        disabled=move || list.with(|s| s.page + 1 >= s.page_count())
                        on:click=move |_| list.update(ArticleListState::next_page)
                    >
                        "Next"
                    </button>
                </div>
            </Show>

            <Show when=move || pending_delete.with(Option::is_some)>
                <ConfirmDialog
                    title="Delete Article"
                    message="Are you sure you want to delete this article? This action cannot be undone."
                    confirm_label="Delete"
                    danger=true
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
        </div>
    }
}

#[component]
fn ArticleRow(
    article: Article,
    session: SessionContext,
    pending_delete: RwSignal<Option<String>>,
) -> impl IntoView {
    let view_href = format!("/articles/{}", article.id);
    let edit_href = format!("{view_href}/edit");
    let history_href = format!("{view_href}/history");
    let owned = session.owns(&article.author.id);
    let id = article.id;

    let owner_actions = owned.then(move || {
        view! {
            <a class="btn btn--small" href=edit_href>"Edit"</a>
            <a class="btn btn--small" href=history_href>"History"</a>
            <button
                class="btn btn--small btn--danger"
                on:click=move |_| pending_delete.set(Some(id.clone()))
            >
                "Delete"
            </button>
        }
    });

    view! {
        <tr>
            <td>
                <a class="articles-table__title" href=view_href.clone()>{article.title}</a>
            </td>
            <td>
                <span class="tag">{article.author.name}</span>
            </td>
            <td>{format_short_date(&article.created_at)}</td>
            <td class="articles-table__actions">
                <a class="btn btn--small" href=view_href>"View"</a>
                {owner_actions}
            </td>
        </tr>
    }
}

fn fetch_articles(gateway: Gateway, session: SessionContext, list: RwSignal<ArticleListState>) {
    list.update(|s| s.loading = true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_articles(gateway).await {
            Ok(items) => {
                leptos::logging::log!("fetched {} articles", items.len());
                list.update(|s| s.replace_items(items));
            }
            Err(err) => {
                leptos::logging::warn!("article list failed: {err}");
                session.notify_failure(&err, "Failed to fetch articles", false);
            }
        }
        list.update(|s| s.loading = false);
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (gateway, session);
        list.update(|s| s.loading = false);
    }
}

fn delete_article(gateway: Gateway, session: SessionContext, list: RwSignal<ArticleListState>, id: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::delete_article(gateway, &id).await {
            Ok(()) => {
                session.notify_success("Article deleted successfully");
                fetch_articles(gateway, session, list);
            }
            Err(err) => {
                leptos::logging::warn!("delete of article {id} failed: {err}");
                session.notify_failure(&err, "Failed to delete article", true);
            }
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (gateway, session, list, id);
    }
}
