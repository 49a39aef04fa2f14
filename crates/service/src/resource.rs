//! The CRUD contract every table exposes over HTTP.
//!
//! Each entity implements [`Resource`] with its own explicit column lists;
//! the HTTP layer is written once against the trait.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::ServiceError;
use crate::pagination::Pagination;

#[async_trait]
pub trait Resource: Send + Sync + 'static {
    /// Stored row, including its generated id.
    type Record: Serialize + Send + Sync + 'static;
    /// Body accepted by create and update.
    type Input: DeserializeOwned + Send + 'static;

    /// Collection path segment, e.g. `empresas`.
    const PATH: &'static str;
    /// `detail` sent with 404 responses.
    const NOT_FOUND: &'static str;

    async fn list(db: &DatabaseConnection, page: Pagination) -> Result<Vec<Self::Record>, ServiceError>;

    async fn get(db: &DatabaseConnection, id: i32) -> Result<Option<Self::Record>, ServiceError>;

    async fn create(db: &DatabaseConnection, input: Self::Input) -> Result<Self::Record, ServiceError>;

    /// Replace every field of row `id`; `None` when it does not exist.
    async fn update(db: &DatabaseConnection, id: i32, input: Self::Input) -> Result<Option<Self::Record>, ServiceError>;

    /// Remove row `id` and hand back its last state; `None` when it does not exist.
    async fn delete(db: &DatabaseConnection, id: i32) -> Result<Option<Self::Record>, ServiceError>;
}
