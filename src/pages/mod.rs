//! Routed page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! One module per route. Pages own their form and fetch state locally and
//! reach the backend only through `net::api` with the shared `Gateway`.
//! Outcome handling that doesn't need a reactive owner lives here as plain
//! functions so it can be unit tested.

#[cfg(test)]
#[path = "pages_test.rs"]
mod pages_test;

pub mod article_detail;
pub mod article_edit;
pub mod article_history;
pub mod article_new;
pub mod articles;
pub mod not_found;
pub mod sign_in;
pub mod sign_up;

use crate::net::gateway::ApiError;
use crate::net::types::Article;

pub const ARTICLE_NOT_FOUND: &str = "Article not found";

/// Result of loading one article by id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArticleLookup {
    Found(Article),
    Missing,
    Failed(ApiError),
}

pub fn article_lookup(result: Result<Option<Article>, ApiError>) -> ArticleLookup {
    match result {
        Ok(Some(article)) => ArticleLookup::Found(article),
        Ok(None) => ArticleLookup::Missing,
        Err(err) if err.is_not_found() => ArticleLookup::Missing,
        Err(err) => ArticleLookup::Failed(err),
    }
}

/// Notice text for a failed sign-in or sign-up.
pub fn auth_failure_text(err: &ApiError, fallback: &str) -> String {
    let message = err.message().trim();
    if message.is_empty() { fallback.to_owned() } else { message.to_owned() }
}
