//! Authentication API endpoints
//!
//! Login issues a token; logout acknowledges one. Tokens are stateless and
//! are not revoked by logout.

use axum::{extract::State, routing::post, Router};
use tracing::debug;

use crate::api::middleware::RequireToken;
use crate::api::state::AppState;
use crate::api::types::{AccountResponse, ApiError, ApiErrorResponse, GeneralResponse, Json};
use crate::domain::LoginRequest;

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
}

/// Login with username (or id) and password
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = AccountResponse),
        (status = 400, description = "Malformed body", body = ApiErrorResponse),
        (status = 401, description = "Invalid credentials", body = ApiErrorResponse)
    ),
    tag = "auth",
    operation_id = "login"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AccountResponse>, ApiError> {
    debug!(username = ?request.username, id = ?request.id, "Login attempt");

    let account = state.auth.login(&request).await?;

    Ok(Json(AccountResponse { account }))
}

/// Logout the holder of the presented token
#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 200, description = "Logged out", body = GeneralResponse),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse)
    ),
    security(("AccessToken" = [])),
    tag = "auth",
    operation_id = "logout"
)]
pub async fn logout(
    State(state): State<AppState>,
    RequireToken(claims): RequireToken,
) -> Json<GeneralResponse> {
    Json(GeneralResponse {
        general: state.auth.logout(&claims),
    })
}
