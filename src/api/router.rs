use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use utoipa_swagger_ui::SwaggerUi;

use super::auth;
use super::doc::openapi_document;
use super::health;
use super::middleware::{logging_middleware, security_headers_middleware};
use super::state::AppState;
use super::users;

/// Create the full router with application state.
///
/// `public_url` becomes the server URL of the served OpenAPI document.
pub fn create_router(state: AppState, public_url: &str) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .route("/ping", get(health::ping))
        .nest("/users", users::create_users_router())
        .nest("/auth", auth::create_auth_router())
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/swagger.json", openapi_document(public_url)))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(CorsLayer::permissive())
}
