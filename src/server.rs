//! HTTP server assembly and lifecycle.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{Router, routing::get};
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;

use crate::api::{self, AppState};
use crate::config::ClimateConfig;

/// Builds the application router with the index route, the versioned API
/// and a permissive CORS layer.
pub fn app(pool: SqlitePool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(api::home))
        .nest("/api/v1.0", api::router())
        .layer(cors)
        .with_state(AppState { pool })
}

/// Binds and serves until shutdown. TLS is used when the build carries the
/// `tls` feature and the configuration provides a certificate pair.
pub async fn run(config: &ClimateConfig, pool: SqlitePool) -> Result<()> {
    let app = app(pool).layer(TimeoutLayer::new(Duration::from_secs(u64::from(
        config.server.timeout_seconds,
    ))));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| {
            format!(
                "Invalid server address {}:{}",
                config.server.host, config.server.port
            )
        })?;

    #[cfg(feature = "tls")]
    if let (Some(cert), Some(key)) = (&config.server.tls_cert, &config.server.tls_key) {
        let tls = axum_server::tls_rustls::RustlsConfig::from_pem_file(cert, key)
            .await
            .with_context(|| "Failed to load TLS certificate or key")?;

        tracing::info!("Web server running at https://{addr}");
        axum_server::bind_rustls(addr, tls)
            .serve(app.into_make_service())
            .await
            .with_context(|| "Server error")?;
        return Ok(());
    }

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("Web server running at http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .with_context(|| "Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
