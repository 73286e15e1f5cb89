//! Route classification and the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public routes are only reachable signed out, protected routes only signed
//! in. Every route component sits behind the same guard so the rule is
//! applied identically everywhere.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;
use crate::util::session::SessionContext;

/// Sign-in view; where signed-out users land.
pub const PUBLIC_LANDING: &str = "/";
/// Article list; where signed-in users land.
pub const PROTECTED_LANDING: &str = "/articles";

const PUBLIC_ROUTES: [&str; 2] = ["/", "/signup"];
const PROTECTED_ROOT: &str = "/articles";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    Public,
    Protected,
    /// Neither list; the guard leaves it alone.
    Unclassified,
}

/// Classify `path` against the fixed route table.
pub fn classify(path: &str) -> RouteClass {
    let path = normalize(path);
    if PUBLIC_ROUTES.contains(&path) {
        RouteClass::Public
    } else if path == PROTECTED_ROOT
        || path.strip_prefix(PROTECTED_ROOT).is_some_and(|rest| rest.starts_with('/'))
    {
        RouteClass::Protected
    } else {
        RouteClass::Unclassified
    }
}

/// Where to send the user, if `path` is not allowed in the given auth state.
pub fn redirect_for(authenticated: bool, path: &str) -> Option<&'static str> {
    match (classify(path), authenticated) {
        (RouteClass::Public, true) => Some(PROTECTED_LANDING),
        (RouteClass::Protected, false) => Some(PUBLIC_LANDING),
        _ => None,
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    match path.strip_suffix('/') {
        Some("") | None => path,
        Some(trimmed) => trimmed,
    }
}

/// Re-check the route whenever the path or session changes, once resolved.
pub fn install_route_guard<P, F>(session: SessionContext, pathname: P, navigate: F)
where
    P: Fn() -> String + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let path = pathname();
        if !session.state.with(SessionState::is_resolved) {
            return;
        }
        if let Some(target) = session.check_route(&path) {
            if normalize(&path) != target {
                navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        }
    });
}
