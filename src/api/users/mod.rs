//! User account API endpoints

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Router,
};
use tracing::debug;

use crate::api::middleware::RequireToken;
use crate::api::state::AppState;
use crate::api::types::{AccountResponse, ApiError, ApiErrorResponse, Json};
use crate::domain::user::WrappedUser;
use crate::domain::{ClientUserView, RegistrationRequest, UpdateRequest};

/// Create the users router
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/", post(register).patch(update_user))
        .route("/{user_id}", get(get_user_by_id))
        .route("/username/{username}", get(get_user_by_username))
}

/// Register a new user and sign them in
#[utoipa::path(
    post,
    path = "/users",
    request_body = RegistrationRequest,
    responses(
        (status = 200, description = "Registered", body = AccountResponse),
        (status = 400, description = "Malformed body", body = ApiErrorResponse),
        (status = 401, description = "Incorrect input", body = ApiErrorResponse),
        (status = 409, description = "Username already exists", body = ApiErrorResponse)
    ),
    tag = "users",
    operation_id = "registerUser"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegistrationRequest>,
) -> Result<Json<AccountResponse>, ApiError> {
    let account = state.users.register(&request).await?;

    Ok(Json(AccountResponse { account }))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    params(("user_id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User", body = ClientUserView),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
        (status = 404, description = "No such user", body = ApiErrorResponse)
    ),
    security(("AccessToken" = [])),
    tag = "users",
    operation_id = "getUserById"
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    RequireToken(claims): RequireToken,
    Path(user_id): Path<String>,
) -> Result<Json<ClientUserView>, ApiError> {
    debug!(requested_by = %claims.user_id(), %user_id, "Get user by id");

    let user = state.users.get_by_id(&user_id).await?;

    Ok(Json(user))
}

/// Get a user by username
#[utoipa::path(
    get,
    path = "/users/username/{username}",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "User", body = WrappedUser),
        (status = 404, description = "No such user", body = ApiErrorResponse)
    ),
    tag = "users",
    operation_id = "getUserByUsername"
)]
pub async fn get_user_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<WrappedUser>, ApiError> {
    let wrapped = state.users.get_by_username(&username).await?;

    Ok(Json(wrapped))
}

/// Update a user's email and names
#[utoipa::path(
    patch,
    path = "/users",
    request_body = UpdateRequest,
    responses(
        (status = 200, description = "Updated user", body = ClientUserView),
        (status = 400, description = "Malformed body", body = ApiErrorResponse),
        (status = 401, description = "Incorrect input", body = ApiErrorResponse),
        (status = 404, description = "No such user", body = ApiErrorResponse)
    ),
    tag = "users",
    operation_id = "updateUser"
)]
pub async fn update_user(
    State(state): State<AppState>,
    Json(request): Json<UpdateRequest>,
) -> Result<Json<ClientUserView>, ApiError> {
    let user = state.users.update(&request).await?;

    Ok(Json(user))
}
