use std::rc::Rc;

use super::ApiClient;
use crate::error::AppResult;
use crate::models::{EntityId, User};
use crate::stores::UserStore;
use crate::utils::browser::Dialogs;
use crate::utils::constants::MSG_CONFIRM_DELETE_USER;

/// CRUD over `/users`; the store only changes after the backend accepted.
#[derive(Clone)]
pub struct UserService {
    api: ApiClient,
    store: UserStore,
    dialogs: Rc<dyn Dialogs>,
}

impl UserService {
    pub fn new(api: ApiClient, store: UserStore, dialogs: Rc<dyn Dialogs>) -> Self {
        Self { api, store, dialogs }
    }

    pub async fn fetch_users(&self) -> AppResult<Vec<User>> {
        let users: Vec<User> = self.api.get_json("/users").await.map_err(|e| {
            log::error!("❌ Failed to fetch users: {}", e);
            e
        })?;
        log::info!("👥 {} users loaded", users.len());
        self.store.set(users.clone());
        Ok(users)
    }

    /// Appends what the backend returned (with its id), not the input
    pub async fn create_user(&self, user: &User) -> AppResult<User> {
        let created: User = self
            .api
            .post_json("/users", user)
            .await
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.json())
            .map_err(|e| {
                log::error!("❌ Failed to create user {}: {}", user.username, e);
                e
            })?;
        log::info!("✅ User created: {}", created.username);
        self.store.add(created.clone());
        Ok(created)
    }

    /// `Ok(false)` when the operator declines the confirmation (nothing is sent)
    pub async fn delete_user(&self, id: &EntityId) -> AppResult<bool> {
        if !self.dialogs.confirm(MSG_CONFIRM_DELETE_USER) {
            log::info!("↩️ Deletion of user {} cancelled", id);
            return Ok(false);
        }

        self.api
            .delete(&format!("/users/{}", id))
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                log::error!("❌ Failed to delete user {}: {}", id, e);
                e
            })?;
        log::info!("🗑️ User {} deleted", id);
        self.store.remove(id);
        Ok(true)
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }
}
