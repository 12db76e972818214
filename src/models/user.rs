use serde::{Deserialize, Serialize};

use super::{EntityId, Identified};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Default for Role {
    fn default() -> Self {
        Self::User
    }
}

/// User record as stored by the backend.
///
/// The backend ships plaintext passwords and the client compares them directly
/// on login. That is a security defect of the backend contract: credentials
/// should be checked server-side against a hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,
}

impl User {
    /// New user without an id, ready to be POSTed
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            id: None,
            username: username.into(),
            password: password.into(),
            role,
            fullname: None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Exact, case-sensitive match
    pub fn matches_credentials(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Identified for User {
    fn id(&self) -> Option<&EntityId> {
        self.id.as_ref()
    }
}
