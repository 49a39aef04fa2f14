//! Table bootstrap run at service start: every table a service owns is
//! created if it does not exist yet. There is no migration history.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};
use tracing::info;

use crate::{empresa, formulario, metodologia, objetivo, participante, usuario};

/// Create the table backing `entity` unless it already exists.
pub async fn create_table_if_absent<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let mut stmt = Schema::new(backend).create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;
    info!(table = entity.table_name(), "table ensured");
    Ok(())
}

/// Tables of the companies/users service (also used by the evaluation service).
pub async fn ensure_empresas_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    create_table_if_absent(db, empresa::Entity).await?;
    create_table_if_absent(db, usuario::Entity).await?;
    Ok(())
}

/// Tables of the forms service.
pub async fn ensure_formularios_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    create_table_if_absent(db, formulario::Entity).await?;
    create_table_if_absent(db, objetivo::Entity).await?;
    create_table_if_absent(db, participante::Entity).await?;
    create_table_if_absent(db, metodologia::Entity).await?;
    Ok(())
}
