use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderName;
use resources::ResourcesModule;
use resources::api::rest::error::middleware_error;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;
use tower_http::LatencyUnit;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};

use crate::config::{AppConfig, DatabaseConfig, ServerConfig};
use crate::signals;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Open the connection pool described by `cfg`.
///
/// # Errors
/// Returns an error if the database cannot be reached.
pub async fn connect(cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.dsn.clone());
    opts.acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(false);
    if cfg.is_in_memory() {
        opts.max_connections(1).min_connections(1);
    } else {
        opts.max_connections(cfg.max_conns);
    }

    info!(in_memory = cfg.is_in_memory(), "Connecting to database");
    Database::connect(opts)
        .await
        .context("failed to connect to database")
}

/// Serve the module router behind the HTTP layers.
#[must_use]
pub fn build_app(module: &ResourcesModule, server: &ServerConfig) -> Router {
    with_http_layers(module.router(), server)
}

/// Request id, access logging, timeout (504) and body limit.
fn with_http_layers(router: Router, server: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_response(
                        DefaultOnResponse::new()
                            .level(Level::INFO)
                            .latency_unit(LatencyUnit::Millis),
                    ),
            )
            .layer(PropagateRequestIdLayer::new(request_id))
            .layer(HandleErrorLayer::new(middleware_error))
            .layer(TimeoutLayer::new(Duration::from_secs(
                server.request_timeout_secs,
            )))
            .layer(DefaultBodyLimit::max(server.body_limit_bytes)),
    )
}

/// Connect, migrate, and serve until a shutdown signal arrives.
///
/// # Errors
/// Returns an error if startup fails or the listener dies.
pub async fn run(config: AppConfig) -> Result<()> {
    let db = connect(&config.database).await?;
    let module = ResourcesModule::new(db.clone(), config.resources.clone());

    if config.database.auto_migrate {
        module.migrate().await?;
    }

    let app = build_app(&module, &config.server);
    let listener = tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port))
        .await
        .with_context(|| {
            format!(
                "failed to bind {}:{}",
                config.server.host, config.server.port
            )
        })?;

    info!(address = %listener.local_addr()?, "Server is running");

    axum::serve(listener, app)
        .with_graceful_shutdown(signals::shutdown_signal())
        .await
        .context("server error")?;

    info!("Closing database connections");
    db.close().await.context("failed to close database")?;
    Ok(())
}
