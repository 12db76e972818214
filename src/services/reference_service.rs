use serde::de::DeserializeOwned;

use super::ApiClient;
use crate::models::{RoleOption, SelectOption};

/// Lookup lists for form selects.
///
/// The body is parsed whatever the HTTP status. Transport and parse failures
/// are logged and come back as `None` ("unavailable"), which callers must not
/// confuse with `Some(vec![])` ("the backend has none").
#[derive(Clone)]
pub struct ReferenceService {
    api: ApiClient,
}

impl ReferenceService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn fetch_roles(&self) -> Option<Vec<RoleOption>> {
        self.fetch("roles", "/roles").await
    }

    pub async fn fetch_work_types(&self) -> Option<Vec<SelectOption>> {
        self.fetch("work types", "/workTypes").await
    }

    pub async fn fetch_statuses(&self) -> Option<Vec<SelectOption>> {
        self.fetch("statuses", "/status").await
    }

    pub async fn fetch_projects(&self) -> Option<Vec<SelectOption>> {
        self.fetch("projects", "/projects").await
    }

    async fn fetch<T: DeserializeOwned>(&self, what: &str, path: &str) -> Option<Vec<T>> {
        let result = match self.api.get(path).await {
            Ok(response) => {
                if !response.ok() {
                    log::warn!("⚠️ {} answered {}, reading body anyway", path, response.status);
                }
                response.json()
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(options) => Some(options),
            Err(e) => {
                log::error!("❌ Failed to fetch {}: {}", what, e);
                None
            }
        }
    }
}
