//! Employee-to-project assignment link.

use serde::Serialize;
use sqlx::FromRow;
use staffing_core::types::{DbId, Timestamp};

/// A row from the `project_employees` link table.
///
/// Keyed by the `(employee_id, project_id)` pair; carries no payload beyond
/// the time the link was created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Assignment {
    #[serde(rename = "empleado_id")]
    pub employee_id: DbId,
    #[serde(rename = "proyecto_id")]
    pub project_id: DbId,
    #[serde(rename = "asignado_en")]
    pub assigned_at: Timestamp,
}
