// ============================================================================
// APP ERROR - single error contract for every service
// ============================================================================

use crate::utils::constants::{MSG_CONNECTION_ERROR, MSG_INVALID_CREDENTIALS};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    /// The request never produced a response (network down, CORS, DNS...)
    #[error("Network error: {0}")]
    Transport(String),

    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Business rule rejected the input before any request was sent
    #[error("{0}")]
    Validation(String),

    #[error("{}", MSG_INVALID_CREDENTIALS)]
    InvalidCredentials,

    #[error("{}", MSG_CONNECTION_ERROR)]
    Connection,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    pub fn http(status: u16, status_text: impl Into<String>) -> Self {
        Self::Http {
            status,
            status_text: status_text.into(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_facing_messages_are_exact() {
        assert_eq!(AppError::InvalidCredentials.to_string(), "Invalid username or password");
        assert_eq!(AppError::Connection.to_string(), "Error connecting to the server");
        assert_eq!(
            AppError::Validation("Hours must be between 0 and 8".into()).to_string(),
            "Hours must be between 0 and 8"
        );
    }

    #[test]
    fn http_error_display() {
        assert_eq!(AppError::http(404, "Not Found").to_string(), "HTTP 404: Not Found");
    }

    #[test]
    fn serde_errors_become_parse_errors() {
        let err: AppError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, AppError::Parse(_)));
    }
}
