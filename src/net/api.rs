//! Typed calls for each backend endpoint.
//!
//! Each call is split into a request builder (pure, tested) and an async
//! wrapper that sends it through the [`Gateway`].
//!
//! SESSION FLAGS
//! =============
//! Every article operation is sent as session-requiring, mutations included.
//! Only sign-up and sign-in go out without one.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::gateway::{ApiError, ApiRequest, Gateway, decode};
use super::types::{
    Article, ArticleDraft, ArticleList, ArticleRevision, AuthResponse, SignInRequest, SignUpRequest, SummaryResponse,
};

fn article_endpoint(id: &str) -> String {
    format!("/articles/{id}")
}

fn article_history_endpoint(id: &str) -> String {
    format!("/articles/{id}/history")
}

fn article_summary_endpoint(id: &str) -> String {
    format!("/articles/{id}/summary")
}

fn sign_up_request(body: &SignUpRequest) -> Result<ApiRequest, ApiError> {
    ApiRequest::post("/auth/signup", body)
}

fn sign_in_request(body: &SignInRequest) -> Result<ApiRequest, ApiError> {
    ApiRequest::post("/auth/login", body)
}

fn list_articles_request() -> ApiRequest {
    ApiRequest::get("/articles").with_session()
}

fn get_article_request(id: &str) -> ApiRequest {
    ApiRequest::get(article_endpoint(id)).with_session()
}

fn create_article_request(draft: &ArticleDraft) -> Result<ApiRequest, ApiError> {
    Ok(ApiRequest::post("/articles", draft)?.with_session())
}

fn update_article_request(id: &str, draft: &ArticleDraft) -> Result<ApiRequest, ApiError> {
    Ok(ApiRequest::patch(article_endpoint(id), draft)?.with_session())
}

fn delete_article_request(id: &str) -> ApiRequest {
    ApiRequest::delete(article_endpoint(id)).with_session()
}

fn history_request(id: &str) -> ApiRequest {
    ApiRequest::get(article_history_endpoint(id)).with_session()
}

fn summary_request(id: &str) -> ApiRequest {
    ApiRequest::get(article_summary_endpoint(id)).with_session()
}

/// `null` and `{}` mean the article does not exist.
fn article_or_none(value: Value) -> Result<Option<Article>, ApiError> {
    match &value {
        Value::Null => Ok(None),
        Value::Object(map) if map.is_empty() => Ok(None),
        _ => decode(value).map(Some),
    }
}

/// Register via `POST /auth/signup`.
///
/// # Errors
///
/// Returns the normalized gateway error.
pub async fn sign_up(gateway: Gateway, body: &SignUpRequest) -> Result<AuthResponse, ApiError> {
    gateway.send(sign_up_request(body)?).await
}

/// Sign in via `POST /auth/login`.
///
/// # Errors
///
/// Returns the normalized gateway error.
pub async fn sign_in(gateway: Gateway, body: &SignInRequest) -> Result<AuthResponse, ApiError> {
    gateway.send(sign_in_request(body)?).await
}

/// Fetch every article via `GET /articles`.
///
/// # Errors
///
/// Returns the normalized gateway error.
pub async fn list_articles(gateway: Gateway) -> Result<Vec<Article>, ApiError> {
    let list: ArticleList = gateway.send(list_articles_request()).await?;
    Ok(list.data)
}

/// Fetch one article via `GET /articles/{id}`. `Ok(None)` when the backend
/// answers with an empty body.
///
/// # Errors
///
/// Returns the normalized gateway error.
pub async fn get_article(gateway: Gateway, id: &str) -> Result<Option<Article>, ApiError> {
    article_or_none(gateway.send_value(get_article_request(id)).await?)
}

/// Create via `POST /articles`. The response body is not interpreted.
///
/// # Errors
///
/// Returns the normalized gateway error.
pub async fn create_article(gateway: Gateway, draft: &ArticleDraft) -> Result<(), ApiError> {
    gateway.send_value(create_article_request(draft)?).await.map(drop)
}

/// Update via `PATCH /articles/{id}`.
///
/// # Errors
///
/// Returns the normalized gateway error.
pub async fn update_article(gateway: Gateway, id: &str, draft: &ArticleDraft) -> Result<(), ApiError> {
    gateway.send_value(update_article_request(id, draft)?).await.map(drop)
}

/// Delete via `DELETE /articles/{id}`.
///
/// # Errors
///
/// Returns the normalized gateway error.
pub async fn delete_article(gateway: Gateway, id: &str) -> Result<(), ApiError> {
    gateway.send_value(delete_article_request(id)).await.map(drop)
}

/// Revision history via `GET /articles/{id}/history`.
///
/// # Errors
///
/// Returns the normalized gateway error.
pub async fn article_history(gateway: Gateway, id: &str) -> Result<Vec<ArticleRevision>, ApiError> {
    gateway.send(history_request(id)).await
}

/// Ask the backend to summarize via `GET /articles/{id}/summary`.
///
/// # Errors
///
/// Returns the normalized gateway error.
pub async fn generate_summary(gateway: Gateway, id: &str) -> Result<String, ApiError> {
    let response: SummaryResponse = gateway.send(summary_request(id)).await?;
    Ok(response.summary)
}
