use std::convert::Infallible;
use std::ops::Deref;
use std::time::Instant;

use axum::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use sea_orm::DatabaseConnection;
use tracing::debug;

/// Router state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Database handle bound to one request: a clone of the shared pool handle,
/// dropped when the handler returns. Each statement checks a connection out
/// of the sqlx pool and returns it when the statement finishes; the drop only
/// logs how long the request held the handle.
pub struct DbSession {
    db: DatabaseConnection,
    opened: Instant,
}

impl DbSession {
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl Deref for DbSession {
    type Target = DatabaseConnection;

    fn deref(&self) -> &Self::Target {
        &self.db
    }
}

impl Drop for DbSession {
    fn drop(&mut self) {
        debug!(elapsed_ms = self.opened.elapsed().as_millis() as u64, "db session released");
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for DbSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        debug!("db session opened");
        Ok(Self { db: app_state.db, opened: Instant::now() })
    }
}
