pub mod assignment;
pub mod employee;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /empleados                                         list, create
/// /empleados/{id}                                    get, update, soft delete
/// /empleados/buscar/{nombre}                         get by exact name
///
/// /proyectos                                         list, create
/// /proyectos/{id}                                    get, update, soft delete
/// /proyectos/detalle/{id}                            project + manager + employees
/// /proyectos/activos/detalle                         detail view of every active project
///
/// /asignaciones/empleado/{eid}/proyecto/{pid}        assign (POST), unassign (DELETE)
/// /asignaciones/empleado/{eid}                       projects of an employee
/// /asignaciones/proyecto/{pid}                       employees of a project
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(employee::router())
        .merge(project::router())
        .merge(assignment::router())
}
