//! JSON GET/POST helpers.
//!
//! GET sends no extra headers. POST sends the payload as JSON with
//! `Content-Type: application/json` and the page's CSRF token in
//! `X-CSRFToken`, read from the hidden `csrfmiddlewaretoken` field on every
//! call so a token rotated by the server is always picked up.
//!
//! ERROR HANDLING
//! ==============
//! Nothing is retried and nothing is swallowed: transport and decode failures
//! are returned to the caller. The HTTP status is not inspected; the endpoints
//! answer errors with JSON bodies, which decode like any other response.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::consts::{CSRF_FIELD_NAME, CSRF_HEADER};
use crate::dom::{Dom, Selector};
use crate::error::UiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully built request, ready for a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    #[must_use]
    pub fn get(url: &str) -> Self {
        Self { method: Method::Get, url: url.to_owned(), headers: Vec::new(), body: None }
    }

    /// Build a JSON POST carrying `csrf_token`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Json`] if `payload` cannot be serialized.
    pub fn post_json<T: Serialize + ?Sized>(url: &str, payload: &T, csrf_token: &str) -> Result<Self, UiError> {
        Ok(Self::post_raw(url, serde_json::to_string(payload)?, csrf_token))
    }

    /// Build a JSON POST whose body is already-encoded text, sent byte for byte.
    #[must_use]
    pub fn post_raw(url: &str, json: String, csrf_token: &str) -> Self {
        Self {
            method: Method::Post,
            url: url.to_owned(),
            headers: vec![
                ("Content-Type".to_owned(), "application/json".to_owned()),
                (CSRF_HEADER.to_owned(), csrf_token.to_owned()),
            ],
            body: Some(json),
        }
    }

    /// Value of header `name` (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter().find(|(key, _)| key.eq_ignore_ascii_case(name)).map(|(_, value)| value.as_str())
    }
}

/// Sends a request and yields the raw response body.
pub trait Transport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'static, Result<String, UiError>>;
}

/// Current CSRF token from the page, or an empty string when the field is absent.
pub fn csrf_token<D: Dom>(dom: &D) -> String {
    dom.query_first(Selector::Name(CSRF_FIELD_NAME)).map(|field| dom.value(&field)).unwrap_or_default()
}

pub struct ApiClient<D: Dom> {
    dom: Rc<D>,
    transport: Rc<dyn Transport>,
}

impl<D: Dom> Clone for ApiClient<D> {
    fn clone(&self) -> Self {
        Self { dom: Rc::clone(&self.dom), transport: Rc::clone(&self.transport) }
    }
}

impl<D: Dom> ApiClient<D> {
    pub fn new(dom: Rc<D>, transport: Rc<dyn Transport>) -> Self {
        Self { dom, transport }
    }

    /// `GET url` and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not valid JSON for `T`.
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, UiError> {
        self.execute(ApiRequest::get(url)).await
    }

    /// `POST url` with `payload` as JSON and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error if `payload` cannot be serialized, the request fails,
    /// or the body is not valid JSON for `T`.
    pub async fn post<B, T>(&self, url: &str, payload: &B) -> Result<T, UiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.post_raw(url, serde_json::to_string(payload)?).await
    }

    /// `POST url` with `json` as the body, unchanged.
    ///
    /// Page scripts hand over `JSON.stringify` output; going through a
    /// `serde_json::Value` would reorder object keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not valid JSON for `T`.
    pub async fn post_raw<T: DeserializeOwned>(&self, url: &str, json: String) -> Result<T, UiError> {
        let token = csrf_token(self.dom.as_ref());
        if token.is_empty() {
            log::warn!("POST {url} without CSRF token");
        }
        self.execute(ApiRequest::post_raw(url, json, &token)).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, UiError> {
        log::debug!("{:?} {}", request.method, request.url);
        let body = self.transport.send(request).await?;
        Ok(serde_json::from_str(&body)?)
    }
}
