#![cfg(test)]
use sea_orm::DatabaseConnection;

use models::db::connect_memory;
use models::schema::{ensure_empresas_schema, ensure_formularios_schema};

/// Fresh in-memory database holding every table, one per test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_memory().await?;
    ensure_empresas_schema(&db).await?;
    ensure_formularios_schema(&db).await?;
    Ok(db)
}
