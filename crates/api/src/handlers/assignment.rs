//! Handlers for the `/asignaciones` resource (employee <-> project links).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use staffing_core::error::CoreError;
use staffing_core::types::DbId;
use staffing_db::models::employee::Employee;
use staffing_db::models::project::Project;
use staffing_db::repositories::{AssignmentRepo, EmployeeRepo, ProjectRepo};

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::handlers::employee::ensure_employee_exists;
use crate::handlers::project::ensure_project_exists;
use crate::response::AssignmentResponse;
use crate::state::AppState;

/// POST /asignaciones/empleado/{employee_id}/proyecto/{project_id}
///
/// The duplicate check is the link table's primary key: a second insert of
/// the same pair fails in the database and is reported as 409, so two
/// concurrent requests cannot both succeed.
pub async fn assign(
    State(state): State<AppState>,
    Path((employee_id, project_id)): Path<(DbId, DbId)>,
) -> AppResult<(StatusCode, Json<AssignmentResponse>)> {
    ensure_employee_exists(&state.pool, employee_id).await?;
    ensure_project_exists(&state.pool, project_id).await?;

    let assignment = match AssignmentRepo::create(&state.pool, employee_id, project_id).await {
        Ok(assignment) => assignment,
        Err(err) if is_unique_violation(&err) => {
            return Err(AppError::Core(CoreError::Conflict(format!(
                "Employee {employee_id} is already assigned to project {project_id}"
            ))));
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(employee_id, project_id, "Employee assigned to project");

    Ok((
        StatusCode::CREATED,
        Json(AssignmentResponse {
            mensaje: "Empleado asignado correctamente".to_string(),
            empleado_id: assignment.employee_id,
            proyecto_id: assignment.project_id,
        }),
    ))
}

/// DELETE /asignaciones/empleado/{employee_id}/proyecto/{project_id}
pub async fn unassign(
    State(state): State<AppState>,
    Path((employee_id, project_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<AssignmentResponse>> {
    let removed = AssignmentRepo::delete(&state.pool, employee_id, project_id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::AssignmentNotFound {
            employee_id,
            project_id,
        }));
    }

    tracing::info!(employee_id, project_id, "Employee unassigned from project");

    Ok(Json(AssignmentResponse {
        mensaje: format!(
            "El empleado con ID {employee_id} fue desvinculado del proyecto con ID {project_id}."
        ),
        empleado_id: employee_id,
        proyecto_id: project_id,
    }))
}

/// GET /asignaciones/empleado/{employee_id}
///
/// 404 if the employee does not exist; an empty list if it has no projects.
pub async fn projects_for_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<DbId>,
) -> AppResult<Json<Vec<Project>>> {
    ensure_employee_exists(&state.pool, employee_id).await?;
    let projects = ProjectRepo::list_by_employee(&state.pool, employee_id).await?;
    Ok(Json(projects))
}

/// GET /asignaciones/proyecto/{project_id}
///
/// 404 if the project does not exist; an empty list if nobody is assigned.
pub async fn employees_for_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Employee>>> {
    ensure_project_exists(&state.pool, project_id).await?;
    let employees = EmployeeRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(employees))
}
