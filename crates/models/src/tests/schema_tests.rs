use crate::db::{connect_memory, connect_with_config};
use crate::errors::ModelError;
use crate::schema::{ensure_empresas_schema, ensure_formularios_schema};
use crate::usuario::UsuarioInput;
use anyhow::Result;
use configs::DatabaseConfig;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseBackend, Statement};

async fn table_count(db: &sea_orm::DatabaseConnection) -> Result<i64> {
    let row = db
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) AS n FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%'".to_string(),
        ))
        .await?
        .expect("count row");
    Ok(row.try_get("", "n")?)
}

/// Running the bootstrap twice must not fail nor duplicate anything
#[tokio::test]
async fn test_ensure_schema_is_idempotent() -> Result<()> {
    let db = connect_memory().await?;
    ensure_empresas_schema(&db).await?;
    ensure_empresas_schema(&db).await?;
    assert_eq!(table_count(&db).await?, 2);

    ensure_formularios_schema(&db).await?;
    ensure_formularios_schema(&db).await?;
    assert_eq!(table_count(&db).await?, 6);
    Ok(())
}

/// The pool built from configuration accepts sqlite URLs too
#[tokio::test]
async fn test_connect_with_config_sqlite() -> Result<()> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::default()
    };
    cfg.validate()?;
    let db = connect_with_config(&cfg).await?;
    ensure_formularios_schema(&db).await?;
    assert_eq!(table_count(&db).await?, 4);
    Ok(())
}

/// A second user with the same `correo` is rejected by the store and
/// classified as a unique violation
#[tokio::test]
async fn test_duplicate_correo_is_unique_violation() -> Result<()> {
    let db = connect_memory().await?;
    ensure_empresas_schema(&db).await?;

    let input = UsuarioInput {
        correo: "ana@example.com".into(),
        contrasena: "secreta".into(),
        nombre: "Ana".into(),
        rol: "usuario".into(),
    };
    input.clone().into_active_model().insert(&db).await?;

    let err = input.into_active_model().insert(&db).await.unwrap_err();
    match ModelError::from(err) {
        ModelError::UniqueViolation(_) => {}
        other => panic!("expected unique violation, got {other:?}"),
    }
    Ok(())
}
