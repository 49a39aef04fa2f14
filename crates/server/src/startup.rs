use std::future::Future;

use axum::Router;
use configs::{AppConfig, CorsConfig};
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tracing::info;

use crate::catalog::ServiceKind;
use crate::errors::StartupError;
use crate::routes::{self, build_cors};
use crate::session::AppState;

/// Ensure the tables of `kind` exist and assemble its router over `db`.
pub async fn build_app(kind: ServiceKind, db: DatabaseConnection, cors: &CorsConfig) -> Result<Router, StartupError> {
    kind.ensure_schema(&db)
        .await
        .map_err(|e| StartupError::Schema(e.to_string()))?;
    Ok(routes::build_router(kind, AppState::new(db), build_cors(cors)))
}

/// Connect, bootstrap the schema and serve `kind` until `shutdown` resolves.
pub async fn run<F>(kind: ServiceKind, cfg: AppConfig, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let db = models::db::connect_with_config(&cfg.database).await?;
    let app = build_app(kind, db, &cfg.cors).await?;

    let host = cfg.server.host.as_str();
    let listener = TcpListener::bind((host, cfg.server.port))
        .await
        .map_err(|e| StartupError::InvalidConfig(format!("cannot bind {}:{}: {}", host, cfg.server.port, e)))?;
    let addr = listener.local_addr().map_err(anyhow::Error::from)?;
    info!(service = kind.name(), %addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(anyhow::Error::from)?;
    Ok(())
}
