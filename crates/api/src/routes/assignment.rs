//! Route definitions for the `/asignaciones` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::assignment;
use crate::state::AppState;

/// Assignment routes.
///
/// ```text
/// POST   /asignaciones/empleado/{employee_id}/proyecto/{project_id}  -> assign
/// DELETE /asignaciones/empleado/{employee_id}/proyecto/{project_id}  -> unassign
/// GET    /asignaciones/empleado/{employee_id}                        -> projects_for_employee
/// GET    /asignaciones/proyecto/{project_id}                         -> employees_for_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/asignaciones/empleado/{employee_id}/proyecto/{project_id}",
            post(assignment::assign).delete(assignment::unassign),
        )
        .route(
            "/asignaciones/empleado/{employee_id}",
            get(assignment::projects_for_employee),
        )
        .route(
            "/asignaciones/proyecto/{project_id}",
            get(assignment::employees_for_project),
        )
}
