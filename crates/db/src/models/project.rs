//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use staffing_core::types::{Date, DbId, Timestamp};

use crate::models::employee::Employee;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "presupuesto")]
    pub budget: f64,
    #[serde(rename = "estado")]
    pub active: bool,
    #[serde(rename = "gerente_id")]
    pub manager_id: Option<DbId>,
    #[serde(rename = "fecha_inicio")]
    pub start_date: Date,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "presupuesto")]
    pub budget: f64,
    /// Defaults to `true` if omitted.
    #[serde(rename = "estado", default = "default_active")]
    pub active: bool,
    #[serde(rename = "gerente_id", default)]
    pub manager_id: Option<DbId>,
    /// Defaults to the current date if omitted.
    #[serde(rename = "fecha_inicio", default)]
    pub start_date: Option<Date>,
}

/// DTO for replacing a project's editable fields.
///
/// `gerente_id: null` (or omitted) clears the manager. Omitting `estado` or
/// `fecha_inicio` keeps the stored value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "presupuesto")]
    pub budget: f64,
    #[serde(rename = "estado", default)]
    pub active: Option<bool>,
    #[serde(rename = "gerente_id", default)]
    pub manager_id: Option<DbId>,
    #[serde(rename = "fecha_inicio", default)]
    pub start_date: Option<Date>,
}

/// Filters for listing projects. All present filters are combined with AND.
#[derive(Debug, Clone)]
pub struct ProjectFilter {
    pub active: bool,
    /// Inclusive lower budget bound.
    pub min_budget: Option<f64>,
    /// Inclusive upper budget bound.
    pub max_budget: Option<f64>,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self {
            active: true,
            min_budget: None,
            max_budget: None,
        }
    }
}

/// A project together with its resolved manager and assigned employees.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    #[serde(rename = "proyecto")]
    pub project: Project,
    #[serde(rename = "gerente")]
    pub manager: Option<Employee>,
    #[serde(rename = "empleados")]
    pub employees: Vec<Employee>,
}

fn default_active() -> bool {
    true
}
