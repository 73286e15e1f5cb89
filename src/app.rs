//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::AppLayout;
use crate::components::session_gate::SessionGate;
use crate::config::client_config;
use crate::net::gateway::Gateway;
use crate::pages::{
    article_detail::ArticleDetailPage, article_edit::EditArticlePage, article_history::ArticleHistoryPage,
    article_new::NewArticlePage, articles::ArticleListPage, not_found::NotFoundPage, sign_in::SignInPage,
    sign_up::SignUpPage,
};
use crate::util::session::SessionContext;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and gateway contexts and sets up client-side routing.
/// `articles/new` is declared before `articles/:id` so it is never read as an id.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext::new();
    let gateway = Gateway::new(client_config(), session);
    provide_context(session);
    provide_context(gateway);

    view! {
        <Stylesheet id="leptos" href="/pkg/sharewise.css"/>
        <Title text="ShareWise"/>

        <Router>
            <SessionGate>
                <AppLayout>
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=SignInPage/>
                        <Route path=StaticSegment("signup") view=SignUpPage/>
                        <Route path=StaticSegment("articles") view=ArticleListPage/>
                        <Route path=(StaticSegment("articles"), StaticSegment("new")) view=NewArticlePage/>
                        <Route path=(StaticSegment("articles"), ParamSegment("id")) view=ArticleDetailPage/>
                        <Route
                            path=(StaticSegment("articles"), ParamSegment("id"), StaticSegment("edit"))
                            view=EditArticlePage
                        />
                        <Route
                            path=(StaticSegment("articles"), ParamSegment("id"), StaticSegment("history"))
                            view=ArticleHistoryPage
                        />
                    </Routes>
                </AppLayout>
            </SessionGate>
        </Router>
    }
}
