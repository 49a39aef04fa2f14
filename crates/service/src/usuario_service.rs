use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect};
use tracing::{info, instrument, warn};

use models::usuario::{self, UsuarioInput};
use crate::{errors::ServiceError, pagination::Pagination, resource::Resource};

/// List users in id order.
#[instrument(skip(db))]
pub async fn list_usuarios(db: &DatabaseConnection, page: Pagination) -> Result<Vec<usuario::Model>, ServiceError> {
    let rows = usuario::Entity::find()
        .order_by_asc(usuario::Column::IdUsuario)
        .offset(page.skip)
        .limit(page.limit)
        .all(db)
        .await?;
    Ok(rows)
}

/// Get a user by id.
pub async fn get_usuario(db: &DatabaseConnection, id: i32) -> Result<Option<usuario::Model>, ServiceError> {
    let found = usuario::Entity::find_by_id(id).one(db).await?;
    Ok(found)
}

/// Create a user. A taken `correo` is only detected by the unique column
/// and comes back as [`ServiceError::Conflict`].
#[instrument(skip(db, input), fields(correo = %input.correo))]
pub async fn create_usuario(db: &DatabaseConnection, input: UsuarioInput) -> Result<usuario::Model, ServiceError> {
    match input.into_active_model().insert(db).await {
        Ok(created) => {
            info!(id_usuario = created.id_usuario, "usuario created");
            Ok(created)
        }
        Err(e) => {
            let err = ServiceError::from(e);
            if matches!(err, ServiceError::Conflict(_)) {
                warn!("correo already registered");
            }
            Err(err)
        }
    }
}

/// Replace every field of a user, password included.
#[instrument(skip(db, input))]
pub async fn update_usuario(db: &DatabaseConnection, id: i32, input: UsuarioInput) -> Result<Option<usuario::Model>, ServiceError> {
    let Some(existing) = usuario::Entity::find_by_id(id).one(db).await? else { return Ok(None); };
    let mut am: usuario::ActiveModel = existing.into();
    input.apply(&mut am);
    match am.update(db).await {
        Ok(updated) => Ok(Some(updated)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Delete a user; forms that reference it are left as they are.
#[instrument(skip(db))]
pub async fn delete_usuario(db: &DatabaseConnection, id: i32) -> Result<Option<usuario::Model>, ServiceError> {
    let Some(existing) = usuario::Entity::find_by_id(id).one(db).await? else { return Ok(None); };
    let res = usuario::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Ok(None);
    }
    info!(id_usuario = id, "usuario deleted");
    Ok(Some(existing))
}

pub struct Usuarios;

#[async_trait]
impl Resource for Usuarios {
    type Record = usuario::Model;
    type Input = UsuarioInput;

    const PATH: &'static str = "usuarios";
    const NOT_FOUND: &'static str = "Usuario no encontrado";

    async fn list(db: &DatabaseConnection, page: Pagination) -> Result<Vec<usuario::Model>, ServiceError> {
        list_usuarios(db, page).await
    }

    async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<usuario::Model>, ServiceError> {
        get_usuario(db, id).await
    }

    async fn create(db: &DatabaseConnection, input: UsuarioInput) -> Result<usuario::Model, ServiceError> {
        create_usuario(db, input).await
    }

    async fn update(db: &DatabaseConnection, id: i32, input: UsuarioInput) -> Result<Option<usuario::Model>, ServiceError> {
        update_usuario(db, id, input).await
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> Result<Option<usuario::Model>, ServiceError> {
        delete_usuario(db, id).await
    }
}
