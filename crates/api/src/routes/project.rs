//! Route definitions for the `/proyectos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Project routes.
///
/// ```text
/// GET    /proyectos                  -> list
/// POST   /proyectos                  -> create
/// GET    /proyectos/{id}             -> get_by_id
/// PUT    /proyectos/{id}             -> update
/// DELETE /proyectos/{id}             -> delete (soft)
/// GET    /proyectos/detalle/{id}     -> detail
/// GET    /proyectos/activos/detalle  -> list_active_detail
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/proyectos", get(project::list).post(project::create))
        .route("/proyectos/", get(project::list).post(project::create))
        .route(
            "/proyectos/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/proyectos/detalle/{id}", get(project::detail))
        .route("/proyectos/activos/detalle", get(project::list_active_detail))
}
