// ============================================================================
// SESSION STORE - logged-in user, mirrored to storage
// ============================================================================

use std::rc::Rc;

use super::{ReactiveState, SubscriptionId};
use crate::error::AppResult;
use crate::models::User;
use crate::utils::constants::STORAGE_KEY_USER;
use crate::utils::storage::{load_from_storage, remove_from_storage, save_to_storage, Storage};

/// `is_authenticated()` is true exactly when `user()` is `Some`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    user: Option<User>,
    is_authenticated: bool,
}

impl AuthState {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }
}

#[derive(Clone)]
pub struct SessionStore {
    state: ReactiveState<AuthState>,
    storage: Rc<dyn Storage>,
}

impl SessionStore {
    /// Starts authenticated when storage holds a saved user
    pub fn new(storage: Rc<dyn Storage>) -> Self {
        let store = Self {
            state: ReactiveState::new(AuthState::anonymous()),
            storage,
        };
        if let Some(user) = store.load_persisted_user() {
            log::info!("✅ Session restored for {}", user.username);
            store.state.set(AuthState::authenticated(user));
        }
        store
    }

    /// Replace the session and mirror it: authenticated writes the user,
    /// anonymous erases the key. A storage failure is logged, the in-memory
    /// state still changes.
    pub fn set(&self, state: AuthState) {
        if let Err(e) = self.persist(&state) {
            log::error!("❌ Error persisting session: {}", e);
        }
        self.state.set(state);
    }

    pub fn login(&self, user: User) {
        self.set(AuthState::authenticated(user));
    }

    pub fn reset(&self) {
        self.set(AuthState::anonymous());
    }

    pub fn state(&self) -> AuthState {
        self.state.snapshot()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    pub fn is_admin(&self) -> bool {
        self.state.with(|s| s.user().is_some_and(User::is_admin))
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&AuthState) + 'static,
    {
        self.state.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }

    /// Re-read storage. Returns true when a saved user was found and applied.
    pub fn restore(&self) -> bool {
        match self.load_persisted_user() {
            Some(user) => {
                self.set(AuthState::authenticated(user));
                true
            }
            None => false,
        }
    }

    fn persist(&self, state: &AuthState) -> AppResult<()> {
        match state.user() {
            Some(user) if state.is_authenticated() => save_to_storage(self.storage.as_ref(), STORAGE_KEY_USER, user),
            _ => remove_from_storage(self.storage.as_ref(), STORAGE_KEY_USER),
        }
    }

    fn load_persisted_user(&self) -> Option<User> {
        match load_from_storage::<User>(self.storage.as_ref(), STORAGE_KEY_USER) {
            Ok(user) => user,
            Err(e) => {
                log::warn!("⚠️ Discarding unreadable saved session: {}", e);
                if let Err(e) = remove_from_storage(self.storage.as_ref(), STORAGE_KEY_USER) {
                    log::error!("❌ Error erasing saved session: {}", e);
                }
                None
            }
        }
    }
}
