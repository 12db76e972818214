// ============================================================================
// APP - composition root: ports -> stores -> services
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::services::{ApiClient, AuthService, HttpClient, ReferenceService, TimesheetService, UserService};
use crate::stores::{SessionStore, TimesheetStore, UserStore};
use crate::utils::browser::{Dialogs, Navigator};
use crate::utils::storage::Storage;

/// Everything the app needs from the outside world
#[derive(Clone)]
pub struct Ports {
    pub http: Rc<dyn HttpClient>,
    pub storage: Rc<dyn Storage>,
    pub dialogs: Rc<dyn Dialogs>,
    pub navigator: Rc<dyn Navigator>,
}

#[cfg(target_arch = "wasm32")]
impl Ports {
    pub fn browser() -> Self {
        use crate::services::http::FetchClient;
        use crate::utils::browser::{WindowDialogs, WindowNavigator};
        use crate::utils::storage::LocalStorage;

        Self {
            http: Rc::new(FetchClient),
            storage: Rc::new(LocalStorage),
            dialogs: Rc::new(WindowDialogs),
            navigator: Rc::new(WindowNavigator),
        }
    }
}

#[derive(Clone)]
pub struct App {
    config: AppConfig,
    session: SessionStore,
    users: UserStore,
    timesheets: TimesheetStore,
    auth: AuthService,
    user_service: UserService,
    timesheet_service: TimesheetService,
    references: ReferenceService,
}

impl App {
    pub fn new(config: AppConfig, ports: Ports) -> Self {
        let api = ApiClient::new(config.api_url(), ports.http);
        let session = SessionStore::new(ports.storage);
        let users = UserStore::new();
        let timesheets = TimesheetStore::new();

        // Cached collections belong to whoever was logged in
        {
            let users = users.clone();
            let timesheets = timesheets.clone();
            session.subscribe(move |state| {
                if !state.is_authenticated() {
                    users.set(Vec::new());
                    timesheets.set(Vec::new());
                }
            });
        }

        Self {
            auth: AuthService::new(api.clone(), session.clone(), ports.navigator),
            user_service: UserService::new(api.clone(), users.clone(), ports.dialogs.clone()),
            timesheet_service: TimesheetService::new(api.clone(), timesheets.clone(), ports.dialogs),
            references: ReferenceService::new(api),
            config,
            session,
            users,
            timesheets,
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn browser() -> Self {
        Self::new(crate::config::CONFIG.clone(), Ports::browser())
    }

    /// Restore a saved session (and jump to the dashboard if there is one)
    pub fn start(&self) -> bool {
        log::info!(
            "🚀 Timesheet client ({}) against {}",
            self.config.environment(),
            self.config.api_url()
        );
        self.auth.check_auth()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn users(&self) -> &UserStore {
        &self.users
    }

    pub fn timesheets(&self) -> &TimesheetStore {
        &self.timesheets
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn user_service(&self) -> &UserService {
        &self.user_service
    }

    pub fn timesheet_service(&self) -> &TimesheetService {
        &self.timesheet_service
    }

    pub fn references(&self) -> &ReferenceService {
        &self.references
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::timesheet::sample;
    use crate::models::{Role, User};
    use crate::test_support::{FakeBackend, RecordingDialogs, RecordingNavigator, BASE_URL};
    use crate::utils::constants::STORAGE_KEY_USER;
    use crate::utils::storage::{save_to_storage, MemoryStorage};

    fn app(backend: &FakeBackend, storage: &MemoryStorage, navigator: &RecordingNavigator) -> App {
        let ports = Ports {
            http: Rc::new(backend.clone()),
            storage: Rc::new(storage.clone()),
            dialogs: Rc::new(RecordingDialogs::answering(true)),
            navigator: Rc::new(navigator.clone()),
        };
        App::new(AppConfig::with_api_url(BASE_URL), ports)
    }

    fn backend() -> FakeBackend {
        FakeBackend::new()
            .with_collection("users", json!([{"id": 1, "username": "a", "password": "p", "role": "admin"}]))
            .with_collection("timesheets", json!([serde_json::to_value(sample("t1", "4")).unwrap()]))
    }

    #[test]
    fn start_with_saved_session_goes_to_dashboard() {
        let storage = MemoryStorage::new();
        save_to_storage(&storage, STORAGE_KEY_USER, &User::new("a", "p", Role::Admin)).unwrap();
        let navigator = RecordingNavigator::default();

        let app = app(&backend(), &storage, &navigator);
        assert!(app.start());
        assert!(app.session().is_admin());
        assert_eq!(navigator.visited(), vec!["/dashboard".to_string()]);
        assert_eq!(app.config().api_url(), BASE_URL);
    }

    #[test]
    fn start_on_the_dashboard_does_not_reload_it() {
        let storage = MemoryStorage::new();
        save_to_storage(&storage, STORAGE_KEY_USER, &User::new("a", "p", Role::Admin)).unwrap();
        let navigator = RecordingNavigator::at("/dashboard");

        // each page load builds a fresh App and runs start again
        for _ in 0..3 {
            let app = app(&backend(), &storage, &navigator);
            assert!(app.start());
        }
        assert!(navigator.visited().is_empty());
    }

    #[test]
    fn start_without_session_stays_put() {
        let navigator = RecordingNavigator::default();
        let app = app(&backend(), &MemoryStorage::new(), &navigator);
        assert!(!app.start());
        assert!(navigator.visited().is_empty());
    }

    #[tokio::test]
    async fn services_share_the_stores() {
        let navigator = RecordingNavigator::default();
        let app = app(&backend(), &MemoryStorage::new(), &navigator);

        app.auth().login("a", "p").await.unwrap();
        app.user_service().fetch_users().await.unwrap();
        app.timesheet_service().fetch_timesheets().await.unwrap();
        assert_eq!(app.users().len(), 1);
        assert_eq!(app.timesheets().len(), 1);
        assert!(app.references().fetch_projects().await.is_none());
    }

    #[tokio::test]
    async fn logout_clears_cached_collections() {
        let navigator = RecordingNavigator::default();
        let app = app(&backend(), &MemoryStorage::new(), &navigator);

        app.auth().login("a", "p").await.unwrap();
        app.user_service().fetch_users().await.unwrap();
        app.timesheet_service().fetch_timesheets().await.unwrap();

        app.auth().logout();
        assert!(app.users().is_empty());
        assert!(app.timesheets().is_empty());
    }
}
