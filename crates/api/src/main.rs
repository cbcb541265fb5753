use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use staffing_api::config::ServerConfig;
use staffing_api::state::AppState;

const DEFAULT_LOG_FILTER: &str = "staffing_api=debug,staffing_db=debug,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    let addr = SocketAddr::new(
        config.host.parse().expect("HOST must be an IP address"),
        config.port,
    );

    // Startup fails fast: no point serving without a usable database.
    let pool = staffing_db::create_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("Failed to open database");
    staffing_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    staffing_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!(url = %config.database_url, "Database ready");

    let app = staffing_api::build_app(AppState {
        pool: pool.clone(),
        config: Arc::new(config),
    });

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!(%addr, "Staffing API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await
        .expect("Server error");

    pool.close().await;
    tracing::info!("Database pool closed, bye");
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn wait_for_shutdown() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => tracing::info!(signal = "SIGINT", "Shutting down"),
            _ = sigterm.recv() => tracing::info!(signal = "SIGTERM", "Shutting down"),
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
        tracing::info!(signal = "ctrl-c", "Shutting down");
    }
}
