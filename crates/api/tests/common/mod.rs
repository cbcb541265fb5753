#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use staffing_api::config::ServerConfig;
use staffing_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the application router the binary serves, over the given pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    staffing_api::build_app(AppState {
        pool,
        config: Arc::new(test_config()),
    })
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    match body {
        Some(json) => send_raw(app, method, uri, json.to_string()).await,
        None => {
            let request = Request::builder().method(method).uri(uri).body(Body::empty()).unwrap();
            app.oneshot(request).await.unwrap()
        }
    }
}

/// Send `body` verbatim as `application/json`, valid JSON or not.
pub async fn send_raw(app: Router, method: Method, uri: &str, body: impl Into<Body>) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create an employee through the API and return its id.
pub async fn create_employee(pool: &SqlitePool, name: &str, specialty: &str, salary: f64) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/empleados/",
        serde_json::json!({
            "nombre": name,
            "especialidad": specialty,
            "salario": salary,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a project through the API and return its id.
pub async fn create_project(
    pool: &SqlitePool,
    name: &str,
    budget: f64,
    manager_id: Option<i64>,
) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/proyectos/",
        serde_json::json!({
            "nombre": name,
            "descripcion": format!("{name} description"),
            "presupuesto": budget,
            "gerente_id": manager_id,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}
