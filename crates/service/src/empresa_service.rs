use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect};
use tracing::{info, instrument};

use models::empresa::{self, EmpresaInput};
use crate::{errors::ServiceError, pagination::Pagination, resource::Resource};

/// List companies in id order.
#[instrument(skip(db))]
pub async fn list_empresas(db: &DatabaseConnection, page: Pagination) -> Result<Vec<empresa::Model>, ServiceError> {
    let rows = empresa::Entity::find()
        .order_by_asc(empresa::Column::IdEmpresa)
        .offset(page.skip)
        .limit(page.limit)
        .all(db)
        .await?;
    Ok(rows)
}

/// Get a company by id.
pub async fn get_empresa(db: &DatabaseConnection, id: i32) -> Result<Option<empresa::Model>, ServiceError> {
    let found = empresa::Entity::find_by_id(id).one(db).await?;
    Ok(found)
}

/// Create a company.
#[instrument(skip(db, input))]
pub async fn create_empresa(db: &DatabaseConnection, input: EmpresaInput) -> Result<empresa::Model, ServiceError> {
    let created = input.into_active_model().insert(db).await?;
    info!(id_empresa = created.id_empresa, "empresa created");
    Ok(created)
}

/// Replace every field of a company.
#[instrument(skip(db, input))]
pub async fn update_empresa(db: &DatabaseConnection, id: i32, input: EmpresaInput) -> Result<Option<empresa::Model>, ServiceError> {
    let Some(existing) = empresa::Entity::find_by_id(id).one(db).await? else { return Ok(None); };
    let mut am: empresa::ActiveModel = existing.into();
    input.apply(&mut am);
    match am.update(db).await {
        Ok(updated) => Ok(Some(updated)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Delete a company; returns the row as it was before removal.
#[instrument(skip(db))]
pub async fn delete_empresa(db: &DatabaseConnection, id: i32) -> Result<Option<empresa::Model>, ServiceError> {
    let Some(existing) = empresa::Entity::find_by_id(id).one(db).await? else { return Ok(None); };
    let res = empresa::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Ok(None);
    }
    info!(id_empresa = id, "empresa deleted");
    Ok(Some(existing))
}

pub struct Empresas;

#[async_trait]
impl Resource for Empresas {
    type Record = empresa::Model;
    type Input = EmpresaInput;

    const PATH: &'static str = "empresas";
    const NOT_FOUND: &'static str = "Empresa no encontrada";

    async fn list(db: &DatabaseConnection, page: Pagination) -> Result<Vec<empresa::Model>, ServiceError> {
        list_empresas(db, page).await
    }

    async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<empresa::Model>, ServiceError> {
        get_empresa(db, id).await
    }

    async fn create(db: &DatabaseConnection, input: EmpresaInput) -> Result<empresa::Model, ServiceError> {
        create_empresa(db, input).await
    }

    async fn update(db: &DatabaseConnection, id: i32, input: EmpresaInput) -> Result<Option<empresa::Model>, ServiceError> {
        update_empresa(db, id, input).await
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> Result<Option<empresa::Model>, ServiceError> {
        delete_empresa(db, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn acme(nombre: &str) -> EmpresaInput {
        EmpresaInput { nombre: nombre.to_string(), telefono: Some("555".into()) }
    }

    #[tokio::test]
    async fn empresa_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let created = create_empresa(&db, acme("Acme")).await?;
        assert_eq!(created.id_empresa, 1);
        let found = get_empresa(&db, created.id_empresa).await?.unwrap();
        assert_eq!(found, created);

        let updated = update_empresa(&db, created.id_empresa, EmpresaInput { nombre: "Acme Corp".into(), telefono: None })
            .await?
            .unwrap();
        assert_eq!(updated.nombre, "Acme Corp");
        assert_eq!(updated.telefono, None);

        let deleted = delete_empresa(&db, created.id_empresa).await?;
        assert_eq!(deleted, Some(updated));
        assert!(get_empresa(&db, created.id_empresa).await?.is_none());
        // second delete finds nothing
        assert!(delete_empresa(&db, created.id_empresa).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn missing_id_leaves_storage_untouched() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let kept = create_empresa(&db, acme("Kept")).await?;

        assert!(get_empresa(&db, 404).await?.is_none());
        assert!(update_empresa(&db, 404, acme("Ghost")).await?.is_none());
        assert!(delete_empresa(&db, 404).await?.is_none());

        let all = list_empresas(&db, Pagination::default()).await?;
        assert_eq!(all, vec![kept]);
        Ok(())
    }

    #[tokio::test]
    async fn list_keeps_insertion_order_and_skips() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        for i in 0..5 {
            create_empresa(&db, acme(&format!("Empresa {i}"))).await?;
        }

        let all = list_empresas(&db, Pagination::default()).await?;
        let names: Vec<_> = all.iter().map(|e| e.nombre.as_str()).collect();
        assert_eq!(names, ["Empresa 0", "Empresa 1", "Empresa 2", "Empresa 3", "Empresa 4"]);

        let page = list_empresas(&db, Pagination::new(2, 2)).await?;
        let names: Vec<_> = page.iter().map(|e| e.nombre.as_str()).collect();
        assert_eq!(names, ["Empresa 2", "Empresa 3"]);

        assert!(list_empresas(&db, Pagination::new(10, 100)).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn list_accepts_unsigned_extremes() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        create_empresa(&db, acme("Única")).await?;

        assert_eq!(list_empresas(&db, Pagination::new(0, u64::MAX)).await?.len(), 1);
        assert!(list_empresas(&db, Pagination::new(u64::MAX, 1)).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn default_limit_caps_at_one_hundred() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        for i in 0..101 {
            create_empresa(&db, acme(&format!("E{i}"))).await?;
        }
        let page = list_empresas(&db, Pagination::default()).await?;
        assert_eq!(page.len(), 100);
        assert_eq!(page.last().map(|e| e.nombre.as_str()), Some("E99"));
        Ok(())
    }
}
