use serde::{Deserialize, Serialize};

use super::EntityId;

/// Lookup entry (project, work type, status) used by form selects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: EntityId,
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(id: impl Into<EntityId>, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Entry of `/roles`, which may list bare role names or full options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleOption {
    Name(String),
    Option(SelectOption),
}
