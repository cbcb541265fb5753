//! Employee entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use staffing_core::types::{DbId, Timestamp};

/// An employee row from the `employees` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    pub id: DbId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "especialidad")]
    pub specialty: String,
    #[serde(rename = "salario")]
    pub salary: f64,
    /// `false` once the employee has been soft-deleted.
    #[serde(rename = "estado")]
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new employee. New employees are always active.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEmployee {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "especialidad")]
    pub specialty: String,
    #[serde(rename = "salario")]
    pub salary: f64,
}

/// DTO for replacing an employee's editable fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEmployee {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "especialidad")]
    pub specialty: String,
    #[serde(rename = "salario")]
    pub salary: f64,
}

/// Filters for listing employees. All present filters are combined with AND.
#[derive(Debug, Clone)]
pub struct EmployeeFilter {
    /// Exact specialty match.
    pub specialty: Option<String>,
    pub active: bool,
}

impl Default for EmployeeFilter {
    fn default() -> Self {
        Self {
            specialty: None,
            active: true,
        }
    }
}
