//! The five CRUD routes, written once for every [`Resource`].

use axum::{routing::get, Json, Router};

use service::{pagination::Pagination, resource::Resource};

use crate::errors::ApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::session::{AppState, DbSession};

/// `/<path>/` (also without the trailing slash) and `/<path>/:id` for `R`.
pub fn resource_routes<R: Resource>() -> Router<AppState> {
    let collection = get(list::<R>).post(create::<R>);
    Router::new()
        .route(&format!("/{}/", R::PATH), collection.clone())
        .route(&format!("/{}", R::PATH), collection)
        .route(
            &format!("/{}/:id", R::PATH),
            get(read::<R>).put(update::<R>).delete(remove::<R>),
        )
}

async fn list<R: Resource>(db: DbSession, ApiQuery(page): ApiQuery<Pagination>) -> Result<Json<Vec<R::Record>>, ApiError> {
    let rows = R::list(&db, page).await?;
    Ok(Json(rows))
}

async fn create<R: Resource>(db: DbSession, ApiJson(input): ApiJson<R::Input>) -> Result<Json<R::Record>, ApiError> {
    let created = R::create(&db, input).await?;
    Ok(Json(created))
}

async fn read<R: Resource>(db: DbSession, ApiPath(id): ApiPath<i32>) -> Result<Json<R::Record>, ApiError> {
    R::get(&db, id).await?.map(Json).ok_or(ApiError::NotFound(R::NOT_FOUND))
}

async fn update<R: Resource>(
    db: DbSession,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<R::Input>,
) -> Result<Json<R::Record>, ApiError> {
    R::update(&db, id, input).await?.map(Json).ok_or(ApiError::NotFound(R::NOT_FOUND))
}

async fn remove<R: Resource>(db: DbSession, ApiPath(id): ApiPath<i32>) -> Result<Json<R::Record>, ApiError> {
    R::delete(&db, id).await?.map(Json).ok_or(ApiError::NotFound(R::NOT_FOUND))
}
