use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect};
use tracing::{info, instrument};

use models::objetivo::{self, ObjetivoInput};
use crate::{errors::ServiceError, pagination::Pagination, resource::Resource};

#[instrument(skip(db))]
pub async fn list_objetivos(db: &DatabaseConnection, page: Pagination) -> Result<Vec<objetivo::Model>, ServiceError> {
    let rows = objetivo::Entity::find()
        .order_by_asc(objetivo::Column::IdObjetivo)
        .offset(page.skip)
        .limit(page.limit)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn get_objetivo(db: &DatabaseConnection, id: i32) -> Result<Option<objetivo::Model>, ServiceError> {
    let found = objetivo::Entity::find_by_id(id).one(db).await?;
    Ok(found)
}

#[instrument(skip(db, input), fields(id_formulario = input.id_formulario))]
pub async fn create_objetivo(db: &DatabaseConnection, input: ObjetivoInput) -> Result<objetivo::Model, ServiceError> {
    let created = input.into_active_model().insert(db).await?;
    info!(id_objetivo = created.id_objetivo, "objetivo created");
    Ok(created)
}

#[instrument(skip(db, input))]
pub async fn update_objetivo(db: &DatabaseConnection, id: i32, input: ObjetivoInput) -> Result<Option<objetivo::Model>, ServiceError> {
    let Some(existing) = objetivo::Entity::find_by_id(id).one(db).await? else { return Ok(None); };
    let mut am: objetivo::ActiveModel = existing.into();
    input.apply(&mut am);
    match am.update(db).await {
        Ok(updated) => Ok(Some(updated)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[instrument(skip(db))]
pub async fn delete_objetivo(db: &DatabaseConnection, id: i32) -> Result<Option<objetivo::Model>, ServiceError> {
    let Some(existing) = objetivo::Entity::find_by_id(id).one(db).await? else { return Ok(None); };
    let res = objetivo::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Ok(None);
    }
    info!(id_objetivo = id, "objetivo deleted");
    Ok(Some(existing))
}

pub struct Objetivos;

#[async_trait]
impl Resource for Objetivos {
    type Record = objetivo::Model;
    type Input = ObjetivoInput;

    const PATH: &'static str = "objetivos";
    const NOT_FOUND: &'static str = "Objetivo no encontrado";

    async fn list(db: &DatabaseConnection, page: Pagination) -> Result<Vec<objetivo::Model>, ServiceError> {
        list_objetivos(db, page).await
    }

    async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<objetivo::Model>, ServiceError> {
        get_objetivo(db, id).await
    }

    async fn create(db: &DatabaseConnection, input: ObjetivoInput) -> Result<objetivo::Model, ServiceError> {
        create_objetivo(db, input).await
    }

    async fn update(db: &DatabaseConnection, id: i32, input: ObjetivoInput) -> Result<Option<objetivo::Model>, ServiceError> {
        update_objetivo(db, id, input).await
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> Result<Option<objetivo::Model>, ServiceError> {
        delete_objetivo(db, id).await
    }
}
