pub mod api_client;
pub mod auth_service;
pub mod http;
pub mod reference_service;
pub mod timesheet_service;
pub mod user_service;

pub use api_client::ApiClient;
pub use auth_service::AuthService;
pub use http::{HttpClient, HttpRequest, HttpResponse, Method};
pub use reference_service::ReferenceService;
pub use timesheet_service::TimesheetService;
pub use user_service::UserService;
