use axum::{http::HeaderValue, routing::get, Json, Router};
use configs::CorsConfig;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{warn, Level};

use common::types::RootMessage;

use crate::catalog::ServiceKind;
use crate::session::AppState;

pub mod auth;
pub mod resources;

/// Cross-origin layer for `cfg`. The default config mirrors any origin and
/// allows credentials.
pub fn build_cors(cfg: &CorsConfig) -> CorsLayer {
    if cfg.allows_any_origin() {
        return if cfg.allow_credentials { CorsLayer::very_permissive() } else { CorsLayer::permissive() };
    }
    let origins: Vec<HeaderValue> = cfg
        .allow_origins
        .iter()
        .filter_map(|o| match o.trim().parse() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %o, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(cfg.allow_credentials)
}

/// Build the full application router for `kind`: root message, resources, CORS and tracing.
pub fn build_router(kind: ServiceKind, state: AppState, cors: CorsLayer) -> Router {
    let msg = kind.root_message();
    Router::new()
        .route("/", get(move || async move { Json(RootMessage::new(msg)) }))
        .merge(kind.routes())
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
