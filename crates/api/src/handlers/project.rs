//! Handlers for the `/proyectos` resource.
//!
//! Manager policy: a manager set on create/update must exist (404) and be
//! active (409). Reads of a single project (`get_by_id`, `detail`) answer
//! 409 while the assigned manager is inactive. List endpoints never fail on
//! manager state.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sqlx::SqlitePool;
use staffing_core::error::CoreError;
use staffing_core::types::DbId;
use staffing_core::validation::{
    validate_amount_range, validate_positive_amount, validate_required_text,
};
use staffing_db::models::employee::Employee;
use staffing_db::models::project::{CreateProject, Project, ProjectDetail, UpdateProject};
use staffing_db::repositories::{EmployeeRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ValidJson, ValidQuery};
use crate::handlers::employee::ensure_employee_exists;
use crate::query::ProjectListParams;
use crate::response::DeactivatedResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that a project exists, returning the full row.
pub(crate) async fn ensure_project_exists(pool: &SqlitePool, id: DbId) -> AppResult<Project> {
    ProjectRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        })
    })
}

fn validate_fields(name: &str, description: &str, budget: f64) -> AppResult<()> {
    validate_required_text(name, "nombre")?;
    validate_required_text(description, "descripcion")?;
    validate_positive_amount(budget, "presupuesto")?;
    Ok(())
}

/// Reject `name` if any other project (active or not) already uses it.
async fn ensure_name_available(
    pool: &SqlitePool,
    name: &str,
    exclude_id: Option<DbId>,
) -> AppResult<()> {
    if ProjectRepo::name_taken(pool, name, exclude_id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "A project named '{name}' already exists"
        ))));
    }
    Ok(())
}

fn ensure_manager_active(manager: &Employee) -> AppResult<()> {
    if !manager.active {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Manager {} ({}) is inactive",
            manager.id, manager.name
        ))));
    }
    Ok(())
}

/// Validate a manager reference about to be written to a project.
async fn validate_manager_for_write(pool: &SqlitePool, manager_id: Option<DbId>) -> AppResult<()> {
    if let Some(manager_id) = manager_id {
        let manager = ensure_employee_exists(pool, manager_id).await?;
        ensure_manager_active(&manager)?;
    }
    Ok(())
}

/// Resolve a project's manager row, if one is assigned.
async fn load_manager(pool: &SqlitePool, project: &Project) -> AppResult<Option<Employee>> {
    match project.manager_id {
        Some(manager_id) => Ok(EmployeeRepo::find_by_id(pool, manager_id).await?),
        None => Ok(None),
    }
}

/// Compose the detail view from three lookups: the project itself, its
/// manager and the employees linked through assignments.
async fn load_detail(pool: &SqlitePool, project: Project) -> AppResult<ProjectDetail> {
    let manager = load_manager(pool, &project).await?;
    let employees = EmployeeRepo::list_by_project(pool, project.id).await?;
    Ok(ProjectDetail {
        project,
        manager,
        employees,
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /proyectos
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    validate_fields(&input.name, &input.description, input.budget)?;
    validate_manager_for_write(&state.pool, input.manager_id).await?;
    ensure_name_available(&state.pool, &input.name, None).await?;

    let project = ProjectRepo::create(&state.pool, &input).await?;

    tracing::info!(
        project_id = project.id,
        name = %project.name,
        manager_id = ?project.manager_id,
        "Project created",
    );

    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /proyectos?estado=&presupuesto_min=&presupuesto_max=
pub async fn list(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<ProjectListParams>,
) -> AppResult<Json<Vec<Project>>> {
    validate_amount_range(params.presupuesto_min, params.presupuesto_max)?;
    let projects = ProjectRepo::list(&state.pool, &params.into()).await?;
    Ok(Json(projects))
}

/// GET /proyectos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ensure_project_exists(&state.pool, id).await?;
    if let Some(manager) = load_manager(&state.pool, &project).await? {
        ensure_manager_active(&manager)?;
    }
    Ok(Json(project))
}

/// GET /proyectos/detalle/{id}
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectDetail>> {
    let project = ensure_project_exists(&state.pool, id).await?;
    let detail = load_detail(&state.pool, project).await?;
    if let Some(manager) = &detail.manager {
        ensure_manager_active(manager)?;
    }
    Ok(Json(detail))
}

/// GET /proyectos/activos/detalle
///
/// One detail lookup per active project.
pub async fn list_active_detail(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProjectDetail>>> {
    let projects = ProjectRepo::list(&state.pool, &Default::default()).await?;

    let mut details = Vec::with_capacity(projects.len());
    for project in projects {
        details.push(load_detail(&state.pool, project).await?);
    }
    Ok(Json(details))
}

/// PUT /proyectos/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidJson(input): ValidJson<UpdateProject>,
) -> AppResult<Json<Project>> {
    ensure_project_exists(&state.pool, id).await?;
    validate_fields(&input.name, &input.description, input.budget)?;
    validate_manager_for_write(&state.pool, input.manager_id).await?;
    ensure_name_available(&state.pool, &input.name, Some(id)).await?;

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    tracing::info!(project_id = id, "Project updated");

    Ok(Json(project))
}

/// DELETE /proyectos/{id}
///
/// Soft delete: the project stays queryable with `estado = false`.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeactivatedResponse>> {
    let project = ProjectRepo::soft_delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    tracing::info!(project_id = id, "Project deactivated");

    Ok(Json(DeactivatedResponse {
        mensaje: format!("Proyecto '{}' marcado como inactivo.", project.name),
        id: project.id,
        estado: project.active,
    }))
}
