use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect};
use tracing::{info, instrument};

use models::participante::{self, ParticipanteInput};
use crate::{errors::ServiceError, pagination::Pagination, resource::Resource};

#[instrument(skip(db))]
pub async fn list_participantes(db: &DatabaseConnection, page: Pagination) -> Result<Vec<participante::Model>, ServiceError> {
    let rows = participante::Entity::find()
        .order_by_asc(participante::Column::IdParticipante)
        .offset(page.skip)
        .limit(page.limit)
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn get_participante(db: &DatabaseConnection, id: i32) -> Result<Option<participante::Model>, ServiceError> {
    let found = participante::Entity::find_by_id(id).one(db).await?;
    Ok(found)
}

// `firma` can be large; keep it out of the span fields
#[instrument(skip(db, input), fields(id_formulario = input.id_formulario))]
pub async fn create_participante(db: &DatabaseConnection, input: ParticipanteInput) -> Result<participante::Model, ServiceError> {
    let created = input.into_active_model().insert(db).await?;
    info!(id_participante = created.id_participante, "participante created");
    Ok(created)
}

#[instrument(skip(db, input))]
pub async fn update_participante(db: &DatabaseConnection, id: i32, input: ParticipanteInput) -> Result<Option<participante::Model>, ServiceError> {
    let Some(existing) = participante::Entity::find_by_id(id).one(db).await? else { return Ok(None); };
    let mut am: participante::ActiveModel = existing.into();
    input.apply(&mut am);
    match am.update(db).await {
        Ok(updated) => Ok(Some(updated)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[instrument(skip(db))]
pub async fn delete_participante(db: &DatabaseConnection, id: i32) -> Result<Option<participante::Model>, ServiceError> {
    let Some(existing) = participante::Entity::find_by_id(id).one(db).await? else { return Ok(None); };
    let res = participante::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Ok(None);
    }
    info!(id_participante = id, "participante deleted");
    Ok(Some(existing))
}

pub struct Participantes;

#[async_trait]
impl Resource for Participantes {
    type Record = participante::Model;
    type Input = ParticipanteInput;

    const PATH: &'static str = "participantes";
    const NOT_FOUND: &'static str = "Participante no encontrado";

    async fn list(db: &DatabaseConnection, page: Pagination) -> Result<Vec<participante::Model>, ServiceError> {
        list_participantes(db, page).await
    }

    async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<participante::Model>, ServiceError> {
        get_participante(db, id).await
    }

    async fn create(db: &DatabaseConnection, input: ParticipanteInput) -> Result<participante::Model, ServiceError> {
        create_participante(db, input).await
    }

    async fn update(db: &DatabaseConnection, id: i32, input: ParticipanteInput) -> Result<Option<participante::Model>, ServiceError> {
        update_participante(db, id, input).await
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> Result<Option<participante::Model>, ServiceError> {
        delete_participante(db, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn participante_optional_fields_round_trip() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let firma = "data:image/png;base64,".to_string() + &"A".repeat(20_000);
        let created = create_participante(
            &db,
            ParticipanteInput {
                id_formulario: 1,
                cargo: Some("Analista".into()),
                nombre: Some("Carla".into()),
                firma: Some(firma.clone()),
            },
        )
        .await?;
        let found = get_participante(&db, created.id_participante).await?.unwrap();
        assert_eq!(found.firma.as_deref(), Some(firma.as_str()));

        let updated = update_participante(
            &db,
            created.id_participante,
            ParticipanteInput { id_formulario: 1, cargo: None, nombre: None, firma: None },
        )
        .await?
        .unwrap();
        assert_eq!(updated.cargo, None);
        assert_eq!(updated.nombre, None);
        assert_eq!(updated.firma, None);
        Ok(())
    }
}
