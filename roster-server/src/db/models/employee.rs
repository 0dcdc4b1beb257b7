//! Employee Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;
use crate::utils::AppError;
use crate::utils::validation::{optional_salary, optional_text, require_salary, require_text};

/// Employee ID type
pub type EmployeeId = RecordId;

/// Employee record matching the `employee` table
///
/// Wire format is camelCase; the id serializes as a "employee:xyz" string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<EmployeeId>,
    pub name: String,
    pub position: String,
    pub location: String,
    pub salary: f64,
    pub date_of_joining: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create employee payload
///
/// Every field is optional at the serde level so validation can name each
/// missing field in the 400 response instead of failing on the first one.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub name: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub salary: Option<f64>,
    pub date_of_joining: Option<DateTime<Utc>>,
}

/// Validated, normalized employee ready to persist
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub position: String,
    pub location: String,
    pub salary: f64,
    /// None means "joined now"; the repository fills in the creation time
    pub date_of_joining: Option<DateTime<Utc>>,
}

/// Update employee payload: partial, absent fields stay untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub salary: Option<f64>,
    pub date_of_joining: Option<DateTime<Utc>>,
}

impl EmployeeCreate {
    /// Validate and normalize the payload: text fields must be present and
    /// non-blank (trimmed), salary present, finite and non-negative.
    pub fn validate(self) -> Result<NewEmployee, AppError> {
        let mut errors = Vec::new();

        let name = require_text(self.name.as_deref(), "name", &mut errors);
        let position = require_text(self.position.as_deref(), "position", &mut errors);
        let location = require_text(self.location.as_deref(), "location", &mut errors);
        let salary = require_salary(self.salary, &mut errors);

        match (name, position, location, salary) {
            (Some(name), Some(position), Some(location), Some(salary)) => Ok(NewEmployee {
                name,
                position,
                location,
                salary,
                date_of_joining: self.date_of_joining,
            }),
            _ => Err(AppError::validation_errors(errors)),
        }
    }
}

impl EmployeeUpdate {
    /// Validate and normalize the present fields; absent fields pass through
    /// so the stored record keeps its values.
    pub fn validate(self) -> Result<EmployeeUpdate, AppError> {
        let mut errors = Vec::new();

        let name = optional_text(self.name.as_deref(), "name", &mut errors);
        let position = optional_text(self.position.as_deref(), "position", &mut errors);
        let location = optional_text(self.location.as_deref(), "location", &mut errors);
        let salary = optional_salary(self.salary, &mut errors);

        if !errors.is_empty() {
            return Err(AppError::validation_errors(errors));
        }

        Ok(EmployeeUpdate {
            name,
            position,
            location,
            salary,
            date_of_joining: self.date_of_joining,
        })
    }
}
