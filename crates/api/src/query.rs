//! Query parameter types for list endpoints.
//!
//! Parameter names are part of the public API (`?especialidad=&activo=`,
//! `?estado=&presupuesto_min=&presupuesto_max=`). Each struct converts into
//! the repository filter it feeds.

use serde::Deserialize;
use staffing_db::models::employee::EmployeeFilter;
use staffing_db::models::project::ProjectFilter;

/// `GET /empleados` filters. `activo` defaults to `true`.
#[derive(Debug, Default, Deserialize)]
pub struct EmployeeListParams {
    pub especialidad: Option<String>,
    pub activo: Option<bool>,
}

impl From<EmployeeListParams> for EmployeeFilter {
    fn from(params: EmployeeListParams) -> Self {
        Self {
            // An empty `?especialidad=` means "no filter".
            specialty: params.especialidad.filter(|s| !s.is_empty()),
            active: params.activo.unwrap_or(true),
        }
    }
}

/// `GET /proyectos` filters. `estado` defaults to `true`.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListParams {
    pub estado: Option<bool>,
    pub presupuesto_min: Option<f64>,
    pub presupuesto_max: Option<f64>,
}

impl From<ProjectListParams> for ProjectFilter {
    fn from(params: ProjectListParams) -> Self {
        Self {
            active: params.estado.unwrap_or(true),
            min_budget: params.presupuesto_min,
            max_budget: params.presupuesto_max,
        }
    }
}
