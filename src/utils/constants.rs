/// localStorage key holding the serialized logged-in user
pub const STORAGE_KEY_USER: &str = "user";

pub const ROUTE_DASHBOARD: &str = "/dashboard";
pub const ROUTE_LOGIN: &str = "/";

pub const MIN_HOURS: f64 = 0.0;
pub const MAX_HOURS: f64 = 8.0;

pub const MSG_INVALID_CREDENTIALS: &str = "Invalid username or password";
pub const MSG_CONNECTION_ERROR: &str = "Error connecting to the server";
pub const MSG_HOURS_OUT_OF_RANGE: &str = "Hours must be between 0 and 8";
pub const MSG_CONFIRM_DELETE_USER: &str = "Are you sure you want to delete this user?";
