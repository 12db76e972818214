use serde::{Deserialize, Deserializer, Serialize};

use super::{EntityId, Identified, SelectOption};
use crate::error::{AppError, AppResult};
use crate::utils::constants::{MAX_HOURS, MIN_HOURS, MSG_HOURS_OUT_OF_RANGE};

/// Timesheet entry. Field names on the wire are camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timesheet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub project: SelectOption,
    /// Passed through as the backend sent it, no date parsing
    pub date: String,
    /// Ticket number
    pub jira_no: String,
    pub task_updates: String,
    pub work_type: SelectOption,
    pub status: SelectOption,
    /// Submitter
    pub name: String,
    /// Numeric string, e.g. "7.5". A JSON number is read as its text.
    #[serde(deserialize_with = "number_or_string")]
    pub hours: String,
}

fn number_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

impl Timesheet {
    pub fn hours_value(&self) -> Option<f64> {
        self.hours.trim().parse::<f64>().ok().filter(|h| h.is_finite())
    }

    /// `0 <= hours <= 8`. Only checked before submitting, never on read.
    pub fn validate_hours(&self) -> AppResult<f64> {
        match self.hours_value() {
            Some(hours) if (MIN_HOURS..=MAX_HOURS).contains(&hours) => Ok(hours),
            _ => Err(AppError::Validation(MSG_HOURS_OUT_OF_RANGE.to_string())),
        }
    }
}

impl Identified for Timesheet {
    fn id(&self) -> Option<&EntityId> {
        self.id.as_ref()
    }
}

#[cfg(test)]
pub(crate) fn sample(id: &str, hours: &str) -> Timesheet {
    Timesheet {
        id: Some(EntityId::from(id)),
        project: SelectOption::new("p1", "Billing", "billing"),
        date: "2024-03-04".to_string(),
        jira_no: "BIL-42".to_string(),
        task_updates: "Invoice export".to_string(),
        work_type: SelectOption::new("w1", "Development", "development"),
        status: SelectOption::new("s1", "Done", "done"),
        name: "Ana".to_string(),
        hours: hours.to_string(),
    }
}
