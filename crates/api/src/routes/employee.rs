//! Route definitions for the `/empleados` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::employee;
use crate::state::AppState;

/// Employee routes.
///
/// ```text
/// GET    /empleados                  -> list
/// POST   /empleados                  -> create
/// GET    /empleados/{id}             -> get_by_id
/// PUT    /empleados/{id}             -> update
/// DELETE /empleados/{id}             -> delete (soft)
/// GET    /empleados/buscar/{nombre}  -> get_by_name
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/empleados", get(employee::list).post(employee::create))
        .route("/empleados/", get(employee::list).post(employee::create))
        .route(
            "/empleados/{id}",
            get(employee::get_by_id)
                .put(employee::update)
                .delete(employee::delete),
        )
        .route("/empleados/buscar/{nombre}", get(employee::get_by_name))
}
