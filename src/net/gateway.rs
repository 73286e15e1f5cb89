//! Single entry point for every backend call.
//!
//! Client-side (hydrate): HTTP via `gloo-net`, cookies included on every
//! request so the backend session travels with it.
//! Server-side (SSR) and native tests: the transport reports failure, so
//! callers take their normal error path.
//!
//! ERROR HANDLING
//! ==============
//! Every non-success outcome is folded into [`ApiError`] by [`settle`]; callers
//! never see transport types. A 401 additionally expires the session before
//! the error is returned, so no caller special-cases expiry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::util::session::SessionContext;

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

const UNAUTHORIZED: u16 = 401;
const NOT_FOUND: u16 = 404;

/// HTTP verbs the backend contract uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Read.
    Get,
    /// Create.
    Post,
    /// Partial replace.
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// One backend call, described independently of the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    /// Path below the API root, e.g. `/articles/42`.
    pub path: String,
    pub method: Method,
    /// JSON body; only ever set for `Post` and `Patch`.
    pub payload: Option<Value>,
    /// The call needs an established session.
    pub requires_session: bool,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>, payload: Option<Value>) -> Self {
        Self { path: path.into(), method, payload, requires_session: false }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path, None)
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if `body` cannot be represented as JSON.
    pub fn post<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        Ok(Self::new(Method::Post, path, Some(encode(body)?)))
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if `body` cannot be represented as JSON.
    pub fn patch<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        Ok(Self::new(Method::Patch, path, Some(encode(body)?)))
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path, None)
    }

    #[must_use]
    pub fn with_session(mut self) -> Self {
        self.requires_session = true;
        self
    }
}

/// Status and raw body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Normalized failure. `Display` is the human-readable message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Backend rejected the credential; the session has already been expired.
    #[error("{message}")]
    Unauthorized { message: String },
    /// Any other non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// No response at all (network failure, CORS, unavailable off-browser).
    #[error("{message}")]
    Transport { message: String },
    /// Body could not be encoded or decoded.
    #[error("{message}")]
    Decode { message: String },
}

impl ApiError {
    fn generic_transport() -> Self {
        Self::Transport { message: GENERIC_ERROR_MESSAGE.to_owned() }
    }

    fn generic_decode() -> Self {
        Self::Decode { message: GENERIC_ERROR_MESSAGE.to_owned() }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Unauthorized { message }
            | Self::Status { message, .. }
            | Self::Transport { message }
            | Self::Decode { message } => message,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: NOT_FOUND, .. })
    }
}

/// The backend's `message` field, if the body is JSON and carries a non-empty one.
pub fn backend_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let message = value.get("message")?.as_str()?.trim();
    (!message.is_empty()).then(|| message.to_owned())
}

/// Fold a transport outcome into the normalized result.
///
/// `on_unauthorized` runs exactly once for a 401 and never otherwise.
///
/// # Errors
///
/// Returns the [`ApiError`] matching the failure.
pub fn settle<F: FnOnce()>(outcome: Result<RawResponse, String>, on_unauthorized: F) -> Result<Value, ApiError> {
    let response = match outcome {
        Ok(response) => response,
        Err(detail) => {
            leptos::logging::warn!("request failed before a response: {detail}");
            return Err(ApiError::generic_transport());
        }
    };

    if (200..300).contains(&response.status) {
        return parse_body(&response.body);
    }

    let message = backend_message(&response.body).unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_owned());
    leptos::logging::warn!("request failed: status={} message={message}", response.status);
    if response.status == UNAUTHORIZED {
        on_unauthorized();
        return Err(ApiError::Unauthorized { message });
    }
    Err(ApiError::Status { status: response.status, message })
}

fn parse_body(body: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| {
        leptos::logging::error!("undecodable success body: {e}");
        ApiError::generic_decode()
    })
}

/// Decode a settled payload into the caller's expected shape.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the payload does not fit `T`.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| {
        leptos::logging::error!("unexpected response shape: {e}");
        ApiError::generic_decode()
    })
}

fn encode<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|_| ApiError::generic_decode())
}

/// Request dispatcher shared through context.
#[derive(Clone, Copy)]
pub struct Gateway {
    config: &'static ClientConfig,
    session: SessionContext,
}

impl Gateway {
    pub fn new(config: &'static ClientConfig, session: SessionContext) -> Self {
        Self { config, session }
    }

    /// Send `request` and return the raw JSON payload.
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] for any failure.
    pub async fn send_value(self, request: ApiRequest) -> Result<Value, ApiError> {
        if request.requires_session && !self.session.has_token() {
            leptos::logging::debug_warn!(
                "{} {} needs a session but no token is stored",
                request.method.as_str(),
                request.path
            );
        }
        let url = self.config.endpoint(&request.path);
        let outcome = transmit(&url, &request).await;
        let session = self.session;
        settle(outcome, move || session.expire())
    }

    /// Send `request` and decode the payload as `T`.
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] for any failure, including a body
    /// that does not fit `T`.
    pub async fn send<T: DeserializeOwned>(self, request: ApiRequest) -> Result<T, ApiError> {
        decode(self.send_value(request).await?)
    }
}

#[cfg(feature = "hydrate")]
async fn transmit(url: &str, request: &ApiRequest) -> Result<RawResponse, String> {
    use gloo_net::http::{Request, RequestBuilder};
    use web_sys::RequestCredentials;

    let builder: RequestBuilder = match request.method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Patch => Request::patch(url),
        Method::Delete => Request::delete(url),
    }
    .credentials(RequestCredentials::Include)
    .header("Content-Type", "application/json");

    let prepared = match &request.payload {
        Some(payload) => builder.json(payload),
        None => builder.build(),
    }
    .map_err(|e| e.to_string())?;

    let response = prepared.send().await.map_err(|e| e.to_string())?;
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Ok(RawResponse { status, body })
}

#[cfg(not(feature = "hydrate"))]
async fn transmit(url: &str, request: &ApiRequest) -> Result<RawResponse, String> {
    let _ = request;
    Err(format!("{url}: not available on server"))
}
