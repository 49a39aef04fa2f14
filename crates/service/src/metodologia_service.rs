use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect};
use tracing::{info, instrument};

use models::metodologia::{self, MetodologiaInput};
use crate::{errors::ServiceError, pagination::Pagination, resource::Resource};

#[instrument(skip(db))]
pub async fn list_metodologias(db: &DatabaseConnection, page: Pagination) -> Result<Vec<metodologia::Model>, ServiceError> {
    let rows = metodologia::Entity::find()
        .order_by_asc(metodologia::Column::IdMetodologia)
        .offset(page.skip)
        .limit(page.limit)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn get_metodologia(db: &DatabaseConnection, id: i32) -> Result<Option<metodologia::Model>, ServiceError> {
    let found = metodologia::Entity::find_by_id(id).one(db).await?;
    Ok(found)
}

#[instrument(skip(db, input))]
pub async fn create_metodologia(db: &DatabaseConnection, input: MetodologiaInput) -> Result<metodologia::Model, ServiceError> {
    let created = input.into_active_model().insert(db).await?;
    info!(id_metodologia = created.id_metodologia, "metodologia created");
    Ok(created)
}

#[instrument(skip(db, input))]
pub async fn update_metodologia(db: &DatabaseConnection, id: i32, input: MetodologiaInput) -> Result<Option<metodologia::Model>, ServiceError> {
    let Some(existing) = metodologia::Entity::find_by_id(id).one(db).await? else { return Ok(None); };
    let mut am: metodologia::ActiveModel = existing.into();
    input.apply(&mut am);
    match am.update(db).await {
        Ok(updated) => Ok(Some(updated)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Delete a methodology; forms pointing at it keep the dangling id.
#[instrument(skip(db))]
pub async fn delete_metodologia(db: &DatabaseConnection, id: i32) -> Result<Option<metodologia::Model>, ServiceError> {
    let Some(existing) = metodologia::Entity::find_by_id(id).one(db).await? else { return Ok(None); };
    let res = metodologia::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Ok(None);
    }
    info!(id_metodologia = id, "metodologia deleted");
    Ok(Some(existing))
}

pub struct Metodologias;

#[async_trait]
impl Resource for Metodologias {
    type Record = metodologia::Model;
    type Input = MetodologiaInput;

    const PATH: &'static str = "metodologias";
    const NOT_FOUND: &'static str = "Metodología no encontrada";

    async fn list(db: &DatabaseConnection, page: Pagination) -> Result<Vec<metodologia::Model>, ServiceError> {
        list_metodologias(db, page).await
    }

    async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<metodologia::Model>, ServiceError> {
        get_metodologia(db, id).await
    }

    async fn create(db: &DatabaseConnection, input: MetodologiaInput) -> Result<metodologia::Model, ServiceError> {
        create_metodologia(db, input).await
    }

    async fn update(db: &DatabaseConnection, id: i32, input: MetodologiaInput) -> Result<Option<metodologia::Model>, ServiceError> {
        update_metodologia(db, id, input).await
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> Result<Option<metodologia::Model>, ServiceError> {
        delete_metodologia(db, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulario_service::{create_formulario, get_formulario};
    use crate::test_support::get_db;
    use chrono::NaiveDate;
    use models::formulario::FormularioInput;

    #[tokio::test]
    async fn metodologia_delete_leaves_dangling_formulario() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let m = create_metodologia(&db, MetodologiaInput { nombre: "Scrum".into(), descripcion: None }).await?;
        let f = create_formulario(
            &db,
            FormularioInput {
                id_empresa: 1,
                fecha: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
                ciudad: None,
                nombre_software: None,
                id_usuario: 1,
                id_metodologia: m.id_metodologia,
            },
        )
        .await?;

        assert_eq!(delete_metodologia(&db, m.id_metodologia).await?, Some(m.clone()));
        let orphan = get_formulario(&db, f.id_formulario).await?.unwrap();
        assert_eq!(orphan.id_metodologia, m.id_metodologia);
        assert!(get_metodologia(&db, m.id_metodologia).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn metodologia_list_pagination() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        for nombre in ["Kanban", "XP", "RUP"] {
            create_metodologia(&db, MetodologiaInput { nombre: nombre.into(), descripcion: Some("ágil".into()) }).await?;
        }
        let rest = list_metodologias(&db, Pagination::new(1, 100)).await?;
        let names: Vec<_> = rest.iter().map(|m| m.nombre.as_str()).collect();
        assert_eq!(names, ["XP", "RUP"]);
        assert_eq!(list_metodologias(&db, Pagination::new(0, 1)).await?.len(), 1);
        Ok(())
    }
}
