// ============================================================================
// HTTP TRANSPORT - raw request/response, no business logic
// ============================================================================

use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// JSON body, sent with `Content-Type: application/json`
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> AppResult<T> {
        serde_json::from_str(&self.body).map_err(|e| AppError::Parse(e.to_string()))
    }

    /// `Err(Http)` for anything outside 2xx
    pub fn error_for_status(self) -> AppResult<Self> {
        if self.ok() {
            Ok(self)
        } else {
            Err(AppError::http(self.status, self.status_text))
        }
    }
}

/// Sends one request. `Err` only when no response was received at all; any
/// HTTP status, including 4xx/5xx, comes back as `Ok`.
#[async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, request: HttpRequest) -> AppResult<HttpResponse>;
}

#[cfg(target_arch = "wasm32")]
pub use fetch::FetchClient;

#[cfg(target_arch = "wasm32")]
mod fetch {
    use async_trait::async_trait;
    use gloo_net::http::Request;

    use super::{HttpClient, HttpRequest, HttpResponse, Method};
    use crate::error::{AppError, AppResult};

    /// Browser `fetch` through gloo-net
    #[derive(Clone, Copy, Default)]
    pub struct FetchClient;

    #[async_trait(?Send)]
    impl HttpClient for FetchClient {
        async fn send(&self, request: HttpRequest) -> AppResult<HttpResponse> {
            let builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
                Method::Delete => Request::delete(&request.url),
            };

            let response = match request.body {
                Some(body) => builder
                    .header("Content-Type", "application/json")
                    .body(body)
                    .map_err(|e| AppError::Transport(format!("Request build error: {}", e)))?
                    .send()
                    .await,
                None => builder.send().await,
            }
            .map_err(|e| AppError::Transport(e.to_string()))?;

            let status = response.status();
            let status_text = response.status_text();
            let body = response
                .text()
                .await
                .map_err(|e| AppError::Transport(e.to_string()))?;

            Ok(HttpResponse {
                status,
                status_text,
                body,
            })
        }
    }
}
