//! `fetch` transport via `gloo-net`.

use futures::future::LocalBoxFuture;
use gloo_net::http::Request;

use crate::error::UiError;
use crate::net::api::{ApiRequest, Method, Transport};

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

fn transport_error(e: gloo_net::Error) -> UiError {
    UiError::Transport(e.to_string())
}

impl Transport for GlooTransport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'static, Result<String, UiError>> {
        Box::pin(async move {
            let ApiRequest { method, url, headers, body } = request;
            let mut builder = match method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
            };
            for (name, value) in &headers {
                builder = builder.header(name, value);
            }
            let resp = match body {
                Some(body) => builder.body(body).map_err(transport_error)?.send().await,
                None => builder.send().await,
            }
            .map_err(transport_error)?;
            if !resp.ok() {
                log::warn!("{method:?} {url} answered {}", resp.status());
            }
            resp.text().await.map_err(transport_error)
        })
    }
}
