use std::net::SocketAddr;

use axum::Router;
use common::utils::logging::init_logging;
use configs::AppConfig;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, DbAppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load config from `CONFIG_PATH`/`config.toml`, falling back to env vars when
/// the file is missing or invalid. The file error is returned so it can be
/// logged once logging is up.
pub fn load_config() -> Result<(AppConfig, Option<anyhow::Error>), StartupError> {
    match AppConfig::load_and_validate() {
        Ok(cfg) => Ok((cfg, None)),
        Err(file_err) => {
            let cfg = AppConfig::from_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
            Ok((cfg, Some(file_err)))
        }
    }
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Connect, migrate, and assemble the router described by `cfg`.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.run_migrations {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Migration(e.to_string()))?;
        info!("migrations applied");
    }
    Ok(routes::build_router(
        DbAppState::from_db(db),
        build_cors(),
        cfg.server.request_timeout(),
    ))
}

/// Public entry: load config, then build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let (cfg, file_err) = load_config()?;
    init_logging(&cfg.logging.format);
    if let Some(e) = file_err {
        warn!(error = %e, "config file unavailable; using environment");
    }
    run_with_config(cfg).await
}

/// Serve until Ctrl+C. Logging is expected to be initialized already.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting pets api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}
