//! Handlers for the `/empleados` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sqlx::SqlitePool;
use staffing_core::error::CoreError;
use staffing_core::types::DbId;
use staffing_core::validation::{validate_positive_amount, validate_required_text};
use staffing_db::models::employee::{CreateEmployee, Employee, UpdateEmployee};
use staffing_db::repositories::EmployeeRepo;

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::extract::{ValidJson, ValidQuery};
use crate::query::EmployeeListParams;
use crate::response::DeactivatedResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that an employee exists, returning the full row.
pub(crate) async fn ensure_employee_exists(pool: &SqlitePool, id: DbId) -> AppResult<Employee> {
    EmployeeRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        })
    })
}

fn validate_fields(name: &str, specialty: &str, salary: f64) -> AppResult<()> {
    validate_required_text(name, "nombre")?;
    validate_required_text(specialty, "especialidad")?;
    validate_positive_amount(salary, "salario")?;
    Ok(())
}

fn duplicate_name(name: &str) -> AppError {
    AppError::Core(CoreError::Validation(format!(
        "An employee named '{name}' already exists"
    )))
}

/// Reject `name` if any other employee (active or not) already uses it.
async fn ensure_name_available(
    pool: &SqlitePool,
    name: &str,
    exclude_id: Option<DbId>,
) -> AppResult<()> {
    if EmployeeRepo::name_taken(pool, name, exclude_id).await? {
        return Err(duplicate_name(name));
    }
    Ok(())
}

/// A name that slipped past [`ensure_name_available`] concurrently still
/// trips `uq_employees_name`; report it the same way.
fn map_name_violation(err: sqlx::Error, name: &str) -> AppError {
    if is_unique_violation(&err) {
        duplicate_name(name)
    } else {
        err.into()
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /empleados
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateEmployee>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    validate_fields(&input.name, &input.specialty, input.salary)?;
    ensure_name_available(&state.pool, &input.name, None).await?;

    let employee = EmployeeRepo::create(&state.pool, &input)
        .await
        .map_err(|err| map_name_violation(err, &input.name))?;

    tracing::info!(employee_id = employee.id, name = %employee.name, "Employee created");

    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /empleados?especialidad=&activo=
pub async fn list(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<EmployeeListParams>,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = EmployeeRepo::list(&state.pool, &params.into()).await?;
    Ok(Json(employees))
}

/// GET /empleados/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Employee>> {
    let employee = ensure_employee_exists(&state.pool, id).await?;
    Ok(Json(employee))
}

/// GET /empleados/buscar/{nombre}
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Employee>> {
    let employee = EmployeeRepo::find_by_name(&state.pool, &name)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByName {
                entity: "Employee",
                name: name.clone(),
            })
        })?;
    Ok(Json(employee))
}

/// PUT /empleados/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidJson(input): ValidJson<UpdateEmployee>,
) -> AppResult<Json<Employee>> {
    ensure_employee_exists(&state.pool, id).await?;
    validate_fields(&input.name, &input.specialty, input.salary)?;
    ensure_name_available(&state.pool, &input.name, Some(id)).await?;

    let employee = EmployeeRepo::update(&state.pool, id, &input)
        .await
        .map_err(|err| map_name_violation(err, &input.name))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))?;

    tracing::info!(employee_id = id, "Employee updated");

    Ok(Json(employee))
}

/// DELETE /empleados/{id}
///
/// Soft delete: the employee stays queryable with `estado = false`.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DeactivatedResponse>> {
    let employee = EmployeeRepo::soft_delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))?;

    tracing::info!(employee_id = id, "Employee deactivated");

    Ok(Json(DeactivatedResponse {
        mensaje: format!("Empleado '{}' marcado como inactivo.", employee.name),
        id: employee.id,
        estado: employee.active,
    }))
}
