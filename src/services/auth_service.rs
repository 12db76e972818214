use std::rc::Rc;

use super::ApiClient;
use crate::error::{AppError, AppResult};
use crate::models::User;
use crate::stores::SessionStore;
use crate::utils::browser::{goto, Navigator};
use crate::utils::constants::{ROUTE_DASHBOARD, ROUTE_LOGIN};

/// Login against the backend user list.
///
/// The backend exposes every user with a plaintext password and the match is
/// done here, client-side. Kept because that is the backend contract; it must
/// move server-side (hashed credentials) before this is exposed publicly.
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
    session: SessionStore,
    navigator: Rc<dyn Navigator>,
}

impl AuthService {
    pub fn new(api: ApiClient, session: SessionStore, navigator: Rc<dyn Navigator>) -> Self {
        Self { api, session, navigator }
    }

    /// `Err(InvalidCredentials)` when no user matches, `Err(Connection)` when
    /// the user list could not be loaded. Navigating after success is up to
    /// the caller.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<User> {
        log::info!("🔐 Login attempt for {}", username);

        let users: Vec<User> = match self.api.get_json("/users").await {
            Ok(users) => users,
            Err(e) => {
                log::error!("❌ Could not load users for login: {}", e);
                return Err(AppError::Connection);
            }
        };

        match users.into_iter().find(|u| u.matches_credentials(username, password)) {
            Some(user) => {
                log::info!("✅ Logged in as {}", user.username);
                self.session.login(user.clone());
                Ok(user)
            }
            None => {
                log::warn!("⚠️ Invalid credentials for {}", username);
                self.session.reset();
                Err(AppError::InvalidCredentials)
            }
        }
    }

    /// Restores a saved session and jumps to the dashboard. The saved user is
    /// trusted as-is, the backend is not asked again.
    pub fn check_auth(&self) -> bool {
        if self.session.restore() {
            log::info!("🔁 Saved session found, going to dashboard");
            goto(self.navigator.as_ref(), ROUTE_DASHBOARD);
            true
        } else {
            false
        }
    }

    /// Post-login redirect, for callers of `login`
    pub fn enter_dashboard(&self) {
        goto(self.navigator.as_ref(), ROUTE_DASHBOARD);
    }

    pub fn logout(&self) {
        log::info!("👋 Logout");
        self.session.reset();
        goto(self.navigator.as_ref(), ROUTE_LOGIN);
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }
}
