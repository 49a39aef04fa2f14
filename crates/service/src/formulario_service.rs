use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect};
use tracing::{info, instrument};

use models::formulario::{self, FormularioInput};
use crate::{errors::ServiceError, pagination::Pagination, resource::Resource};

#[instrument(skip(db))]
pub async fn list_formularios(db: &DatabaseConnection, page: Pagination) -> Result<Vec<formulario::Model>, ServiceError> {
    let rows = formulario::Entity::find()
        .order_by_asc(formulario::Column::IdFormulario)
        .offset(page.skip)
        .limit(page.limit)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn get_formulario(db: &DatabaseConnection, id: i32) -> Result<Option<formulario::Model>, ServiceError> {
    let found = formulario::Entity::find_by_id(id).one(db).await?;
    Ok(found)
}

/// Create a form. The referenced company, user and methodology are not checked.
#[instrument(skip(db, input), fields(id_empresa = input.id_empresa))]
pub async fn create_formulario(db: &DatabaseConnection, input: FormularioInput) -> Result<formulario::Model, ServiceError> {
    let created = input.into_active_model().insert(db).await?;
    info!(id_formulario = created.id_formulario, "formulario created");
    Ok(created)
}

#[instrument(skip(db, input))]
pub async fn update_formulario(db: &DatabaseConnection, id: i32, input: FormularioInput) -> Result<Option<formulario::Model>, ServiceError> {
    let Some(existing) = formulario::Entity::find_by_id(id).one(db).await? else { return Ok(None); };
    let mut am: formulario::ActiveModel = existing.into();
    input.apply(&mut am);
    match am.update(db).await {
        Ok(updated) => Ok(Some(updated)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Delete a form. Its objectives and participants stay in place.
#[instrument(skip(db))]
pub async fn delete_formulario(db: &DatabaseConnection, id: i32) -> Result<Option<formulario::Model>, ServiceError> {
    let Some(existing) = formulario::Entity::find_by_id(id).one(db).await? else { return Ok(None); };
    let res = formulario::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Ok(None);
    }
    info!(id_formulario = id, "formulario deleted");
    Ok(Some(existing))
}

pub struct Formularios;

#[async_trait]
impl Resource for Formularios {
    type Record = formulario::Model;
    type Input = FormularioInput;

    const PATH: &'static str = "formularios";
    const NOT_FOUND: &'static str = "Formulario no encontrado";

    async fn list(db: &DatabaseConnection, page: Pagination) -> Result<Vec<formulario::Model>, ServiceError> {
        list_formularios(db, page).await
    }

    async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<formulario::Model>, ServiceError> {
        get_formulario(db, id).await
    }

    async fn create(db: &DatabaseConnection, input: FormularioInput) -> Result<formulario::Model, ServiceError> {
        create_formulario(db, input).await
    }

    async fn update(db: &DatabaseConnection, id: i32, input: FormularioInput) -> Result<Option<formulario::Model>, ServiceError> {
        update_formulario(db, id, input).await
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> Result<Option<formulario::Model>, ServiceError> {
        delete_formulario(db, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objetivo_service::{create_objetivo, get_objetivo};
    use crate::test_support::get_db;
    use chrono::NaiveDate;
    use models::objetivo::ObjetivoInput;

    fn form(ciudad: Option<&str>) -> FormularioInput {
        FormularioInput {
            id_empresa: 1,
            fecha: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            ciudad: ciudad.map(str::to_string),
            nombre_software: Some("Inventario".into()),
            id_usuario: 2,
            id_metodologia: 3,
        }
    }

    #[tokio::test]
    async fn formulario_round_trip_and_replace() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let created = create_formulario(&db, form(Some("Bogotá"))).await?;
        assert_eq!(get_formulario(&db, created.id_formulario).await?, Some(created.clone()));

        let mut replacement = form(None);
        replacement.nombre_software = None;
        replacement.id_metodologia = 9;
        let updated = update_formulario(&db, created.id_formulario, replacement).await?.unwrap();
        assert_eq!(updated.ciudad, None);
        assert_eq!(updated.nombre_software, None);
        assert_eq!(updated.id_metodologia, 9);
        assert_eq!(updated.fecha, created.fecha);
        Ok(())
    }

    #[tokio::test]
    async fn deleting_formulario_keeps_objetivos() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let f = create_formulario(&db, form(None)).await?;
        let o = create_objetivo(
            &db,
            ObjetivoInput { id_formulario: f.id_formulario, descripcion: "Evaluar".into(), tipo: "general".into() },
        )
        .await?;

        assert!(delete_formulario(&db, f.id_formulario).await?.is_some());
        assert_eq!(get_objetivo(&db, o.id_objetivo).await?, Some(o));
        Ok(())
    }
}
