// ============================================================================
// API CLIENT - JSON over HTTP against the configured backend (stateless)
// ============================================================================
// No business logic here: build the URL, encode/decode JSON, log
// ============================================================================

use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};

use super::http::{HttpClient, HttpRequest, HttpResponse, Method};
use crate::error::{AppError, AppResult};

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Rc<dyn HttpClient>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, http: Rc<dyn HttpClient>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Raw GET: any status comes back as `Ok`
    pub async fn get(&self, path: &str) -> AppResult<HttpResponse> {
        self.send(HttpRequest::new(Method::Get, self.url(path))).await
    }

    /// GET that requires 2xx and a parsable body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.get(path).await?.error_for_status()?.json()
    }

    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> AppResult<HttpResponse> {
        let request = HttpRequest::new(Method::Post, self.url(path)).with_body(encode(body)?);
        self.send(request).await
    }

    pub async fn put_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> AppResult<HttpResponse> {
        let request = HttpRequest::new(Method::Put, self.url(path)).with_body(encode(body)?);
        self.send(request).await
    }

    pub async fn delete(&self, path: &str) -> AppResult<HttpResponse> {
        self.send(HttpRequest::new(Method::Delete, self.url(path))).await
    }

    async fn send(&self, request: HttpRequest) -> AppResult<HttpResponse> {
        let method = request.method;
        let url = request.url.clone();
        log::debug!("🌐 {} {}", method, url);

        match self.http.send(request).await {
            Ok(response) => {
                if !response.ok() {
                    log::warn!("⚠️ {} {} -> HTTP {}", method, url, response.status);
                }
                Ok(response)
            }
            Err(e) => {
                log::error!("❌ {} {} failed: {}", method, url, e);
                Err(e)
            }
        }
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> AppResult<String> {
    serde_json::to_string(body).map_err(|e| AppError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::test_support::{FakeBackend, BASE_URL};

    fn client(backend: &FakeBackend) -> ApiClient {
        ApiClient::new(format!("{}/", BASE_URL), Rc::new(backend.clone()))
    }

    #[test]
    fn url_joins_single_slash() {
        let api = client(&FakeBackend::new());
        assert_eq!(api.base_url(), BASE_URL);
        assert_eq!(api.url("/users"), "http://api.test/users");
        assert_eq!(api.url("users/3"), "http://api.test/users/3");
    }

    #[tokio::test]
    async fn get_json_decodes_body() {
        let backend = FakeBackend::new().with_collection("roles", json!([{"id": "1", "label": "Admin", "value": "admin"}]));
        let roles: Vec<serde_json::Value> = client(&backend).get_json("/roles").await.unwrap();
        assert_eq!(roles.len(), 1);
    }

    #[tokio::test]
    async fn get_json_rejects_non_2xx() {
        let backend = FakeBackend::new();
        let err = client(&backend).get_json::<Vec<u32>>("/missing").await.unwrap_err();
        assert_eq!(err, AppError::http(404, "Not Found"));
    }

    #[tokio::test]
    async fn raw_get_returns_error_status_as_ok() {
        let backend = FakeBackend::new();
        backend.respond(Method::Get, "/timesheets", 500, "[]");
        let response = client(&backend).get("/timesheets").await.unwrap();
        assert_eq!(response.status, 500);
    }

    #[tokio::test]
    async fn post_sends_json_body() {
        let backend = FakeBackend::new();
        client(&backend).post_json("/users", &json!({"username": "a"})).await.unwrap();

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].body.as_deref(), Some(r#"{"username":"a"}"#));
    }

    #[tokio::test]
    async fn transport_errors_propagate() {
        let backend = FakeBackend::new();
        backend.fail(Method::Delete, "/users/1");
        let err = client(&backend).delete("/users/1").await.unwrap_err();
        assert!(matches!(err, AppError::Transport(_)));
    }
}
