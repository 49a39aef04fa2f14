use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use models::usuario;

use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmAuthRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_by_credentials(&self, correo: &str, contrasena: &str) -> Result<Option<usuario::Model>, AuthError> {
        // passwords are stored as given, so the comparison happens in the query
        usuario::Entity::find()
            .filter(usuario::Column::Correo.eq(correo))
            .filter(usuario::Column::Contrasena.eq(contrasena))
            .one(&self.db)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))
    }
}
