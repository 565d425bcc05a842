//! API Client Wrapper
//!
//! `api_fetch` prefixes the configured origin and hands the request to the
//! browser's `fetch`, returning the raw `Response`. It does not parse JSON,
//! reject non-2xx statuses, time out or retry; the per-domain wrappers
//! below check `ok()` and parse bodies themselves.

mod auth;
mod genres;
mod movies;
mod ratings;
mod removal;
mod users;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use boscov_core::endpoints::{bearer, HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE, JSON};
use boscov_core::models::ErrorBody;
use boscov_core::ApiError;

use crate::config::api_base;
use crate::storage::session_store;

// Re-export all public items
pub use auth::*;
pub use genres::*;
pub use movies::*;
pub use ratings::*;
pub use removal::*;
pub use users::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

/// Method, headers and body of one request
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post() -> Self {
        Self { method: Method::Post, ..Default::default() }
    }

    pub fn put() -> Self {
        Self { method: Method::Put, ..Default::default() }
    }

    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    /// Serialize `body` as JSON and set the content type
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        let text = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.body = Some(text);
        Ok(self.header(HEADER_CONTENT_TYPE, JSON))
    }

    /// Attach the stored bearer token, if any
    pub fn authorized(self) -> Self {
        match session_store().token() {
            Some(token) => self.header(HEADER_AUTHORIZATION, bearer(&token)),
            None => self,
        }
    }
}

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// Prefix the API origin and delegate to `window.fetch`
pub async fn api_fetch(path: &str, options: RequestOptions) -> Result<Response, ApiError> {
    let url = format!("{}{}", api_base(), path);
    log::debug!("{} {}", options.method.as_str(), url);

    let init = RequestInit::new();
    init.set_method(options.method.as_str());
    if !options.headers.is_empty() {
        let headers = Headers::new().map_err(|e| ApiError::Network(js_error(e)))?;
        for (name, value) in &options.headers {
            headers.set(name, value).map_err(|e| ApiError::Network(js_error(e)))?;
        }
        init.set_headers(&headers);
    }
    if let Some(body) = &options.body {
        init.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(&url, &init).map_err(|e| ApiError::Network(js_error(e)))?;
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(js_error(e)))?;
    response
        .dyn_into::<Response>()
        .map_err(|e| ApiError::Network(js_error(e)))
}

/// Call the response's JSON parser and convert into `T`
pub async fn read_json<T: DeserializeOwned>(response: &Response) -> Result<T, ApiError> {
    let promise = response.json().map_err(|e| ApiError::Decode(js_error(e)))?;
    let value = JsFuture::from(promise).await.map_err(|e| ApiError::Decode(js_error(e)))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Turn a non-2xx response into `ApiError::Status`, keeping the server message if any
pub async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = read_json::<ErrorBody>(&response).await.ok().and_then(|b| b.message);
    log::warn!("{} responded {}", response.url(), status);
    Err(ApiError::Status { status, message })
}

/// Send, check status, parse body
pub(crate) async fn fetch_json<T: DeserializeOwned>(path: &str, options: RequestOptions) -> Result<T, ApiError> {
    let response = ensure_ok(api_fetch(path, options).await?).await?;
    read_json(&response).await
}

/// Send and check status, ignoring the body
pub(crate) async fn fetch_ok(path: &str, options: RequestOptions) -> Result<(), ApiError> {
    ensure_ok(api_fetch(path, options).await?).await.map(|_| ())
}

/// Server-provided message when there is one, otherwise `fallback`
pub fn user_message(error: &ApiError, fallback: &str) -> String {
    error.server_message().unwrap_or(fallback).to_string()
}
