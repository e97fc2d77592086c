/**
 * Router Configuration
 *
 * Combines the API routes with the status endpoint, the fallback and the
 * tower layers.
 *
 * # Layers
 *
 * - token headers (`Authorization`, `x-auth-token`) are marked sensitive
 *   before tracing so they never reach the logs
 * - `TraceLayer` opens one span per request
 * - `CorsLayer` answers preflight requests from any origin
 */

use axum::{
    http::{header, HeaderName, Method},
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::sensitive_headers::SetSensitiveRequestHeadersLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::middleware::auth::TOKEN_HEADER;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

#[derive(Serialize, Debug)]
pub struct Status {
    pub name: &'static str,
    pub version: &'static str,
}

/// `GET /status.json`
pub async fn status() -> Json<Status> {
    Json(Status {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn not_found() -> BackendError {
    BackendError::not_found("Not found")
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let token_header = HeaderName::from_static(TOKEN_HEADER);

    let middleware = ServiceBuilder::new()
        .layer(SetSensitiveRequestHeadersLayer::new([
            header::AUTHORIZATION,
            token_header.clone(),
        ]))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
                .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, token_header]),
        );

    let router = Router::new().route("/status.json", get(status));
    let router = configure_api_routes(router, app_state.clone());

    router
        .fallback(not_found)
        .layer(middleware)
        .with_state(app_state)
}
