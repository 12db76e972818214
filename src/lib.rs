// ============================================================================
// TIMESHEET CLIENT - RUST + WASM
// ============================================================================
// - Models: wire types shared with the backend
// - Stores: Rc<RefCell> state with subscribers
// - Services: backend calls, write results into the stores
// - Utils: storage / dialogs / navigation ports, validation
// - App: wires the browser ports into all of the above
// ============================================================================

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use app::{App, Ports};
pub use config::AppConfig;
pub use error::{AppError, AppResult};

#[cfg(target_arch = "wasm32")]
mod entry {
    use std::cell::RefCell;

    use serde::de::DeserializeOwned;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::future_to_promise;

    use crate::app::App;
    use crate::config::CONFIG;
    use crate::error::AppError;
    use crate::models::{EntityId, Timesheet, User};
    use crate::utils::validation::required_message;

    thread_local! {
        static APP: RefCell<Option<App>> = RefCell::new(None);
    }

    fn app() -> Result<App, JsValue> {
        APP.with(|cell| cell.borrow().clone())
            .ok_or_else(|| JsValue::from_str("App is not initialized"))
    }

    fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
        serde_json::to_string(value)
            .map(|json| JsValue::from_str(&json))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    fn from_js<T: DeserializeOwned>(json: &str) -> Result<T, JsValue> {
        serde_json::from_str(json).map_err(|e| js_error(AppError::from(e)))
    }

    fn js_error(e: AppError) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    fn option_to_js<T: serde::Serialize>(value: Option<T>) -> Result<JsValue, JsValue> {
        match value {
            Some(value) => to_js(&value),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if CONFIG.is_logging_enabled() {
            wasm_logger::init(wasm_logger::Config::default());
        }

        let app = App::browser();
        app.start();
        APP.with(|cell| *cell.borrow_mut() = Some(app));
        Ok(())
    }

    // ========================================================================
    // SESSION
    // ========================================================================

    /// Resolves with the user as JSON and navigates to the dashboard;
    /// rejects with the user-facing message.
    #[wasm_bindgen]
    pub fn login(username: String, password: String) -> js_sys::Promise {
        future_to_promise(async move {
            let app = app()?;
            let user = app.auth().login(&username, &password).await.map_err(js_error)?;
            let json = to_js(&user)?;
            app.auth().enter_dashboard();
            Ok(json)
        })
    }

    /// True when a saved session was restored
    #[wasm_bindgen]
    pub fn check_auth() -> Result<bool, JsValue> {
        Ok(app()?.auth().check_auth())
    }

    #[wasm_bindgen]
    pub fn logout() -> Result<(), JsValue> {
        app()?.auth().logout();
        Ok(())
    }

    #[wasm_bindgen]
    pub fn current_user() -> Result<JsValue, JsValue> {
        option_to_js(app()?.session().current_user())
    }

    // ========================================================================
    // USERS
    // ========================================================================

    #[wasm_bindgen]
    pub fn fetch_users() -> js_sys::Promise {
        future_to_promise(async move {
            let users = app()?.user_service().fetch_users().await.map_err(js_error)?;
            to_js(&users)
        })
    }

    /// `user_json` is a user without id; resolves with the created user
    #[wasm_bindgen]
    pub fn create_user(user_json: String) -> js_sys::Promise {
        future_to_promise(async move {
            let user: User = from_js(&user_json)?;
            let created = app()?.user_service().create_user(&user).await.map_err(js_error)?;
            to_js(&created)
        })
    }

    /// Resolves false when the operator declined the confirmation
    #[wasm_bindgen]
    pub fn delete_user(id: String) -> js_sys::Promise {
        future_to_promise(async move {
            let deleted = app()?
                .user_service()
                .delete_user(&EntityId::from(id))
                .await
                .map_err(js_error)?;
            Ok(JsValue::from_bool(deleted))
        })
    }

    // ========================================================================
    // TIMESHEETS
    // ========================================================================

    #[wasm_bindgen]
    pub fn load_timesheets() -> js_sys::Promise {
        future_to_promise(async move {
            let sheets = app()?.timesheet_service().fetch_timesheets().await.map_err(js_error)?;
            to_js(&sheets)
        })
    }

    #[wasm_bindgen]
    pub fn add_timesheet(entry_json: String) -> js_sys::Promise {
        future_to_promise(async move {
            let entry: Timesheet = from_js(&entry_json)?;
            app()?.timesheet_service().add_timesheet(&entry).await.map_err(js_error)?;
            Ok(JsValue::UNDEFINED)
        })
    }

    #[wasm_bindgen]
    pub fn update_timesheet(id: String, entry_json: String) -> js_sys::Promise {
        future_to_promise(async move {
            let entry: Timesheet = from_js(&entry_json)?;
            app()?
                .timesheet_service()
                .update_timesheet(&EntityId::from(id), &entry)
                .await
                .map_err(js_error)?;
            Ok(JsValue::UNDEFINED)
        })
    }

    #[wasm_bindgen]
    pub fn delete_timesheet(id: String) -> js_sys::Promise {
        future_to_promise(async move {
            app()?
                .timesheet_service()
                .delete_timesheet(&EntityId::from(id))
                .await
                .map_err(js_error)?;
            Ok(JsValue::UNDEFINED)
        })
    }

    // ========================================================================
    // LOOKUPS - resolve with null when unavailable
    // ========================================================================

    #[wasm_bindgen]
    pub fn fetch_roles() -> js_sys::Promise {
        future_to_promise(async move { option_to_js(app()?.references().fetch_roles().await) })
    }

    #[wasm_bindgen]
    pub fn fetch_work_types() -> js_sys::Promise {
        future_to_promise(async move { option_to_js(app()?.references().fetch_work_types().await) })
    }

    #[wasm_bindgen]
    pub fn fetch_statuses() -> js_sys::Promise {
        future_to_promise(async move { option_to_js(app()?.references().fetch_statuses().await) })
    }

    #[wasm_bindgen]
    pub fn fetch_projects() -> js_sys::Promise {
        future_to_promise(async move { option_to_js(app()?.references().fetch_projects().await) })
    }

    // ========================================================================
    // FORMS
    // ========================================================================

    /// Error text for a required field, empty when valid
    #[wasm_bindgen]
    pub fn validate_field(value: String, field_name: String, is_submitted: bool) -> String {
        required_message(&value, &field_name, is_submitted)
    }
}
