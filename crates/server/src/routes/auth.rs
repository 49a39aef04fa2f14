use std::sync::Arc;

use axum::{routing::post, Json, Router};

use models::usuario;
use service::auth::{domain::LoginInput, repo::SeaOrmAuthRepository, AuthService};

use crate::errors::ApiError;
use crate::extract::ApiJson;
use crate::session::{AppState, DbSession};

pub fn routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// `POST /login`: the stored user when email and password both match, 401 otherwise.
pub async fn login(db: DbSession, ApiJson(input): ApiJson<LoginInput>) -> Result<Json<usuario::Model>, ApiError> {
    let repo = Arc::new(SeaOrmAuthRepository::new(db.connection().clone()));
    let svc = AuthService::new(repo);
    let user = svc.login(input).await?;
    Ok(Json(user))
}
