//! OpenAPI documentation
//!
//! [`ApiDoc`] collects every endpoint and schema. The served document gets
//! its server URL from configuration via [`openapi_document`].

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi};

use crate::api::health::{HealthResponse, HealthStatus, PingApplication, PingResponse};
use crate::api::middleware::ACCESS_TOKEN_HEADER;
use crate::api::types::{AccountResponse, ApiErrorResponse, GeneralResponse};
use crate::domain::user::WrappedUser;
use crate::domain::{
    ClientUserView, LoginRequest, RegistrationRequest, UpdateRequest, ValidationFailure,
};
use crate::infrastructure::auth::{AccountSession, LogoutAck};

/// Register the `x-access-token` header scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "AccessToken",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                ACCESS_TOKEN_HEADER,
                "Token issued by POST /users or POST /auth/login.",
            ))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "User account API",
        description = "Registration, login and profile management for user accounts."
    ),
    paths(
        crate::api::users::register,
        crate::api::users::get_user_by_id,
        crate::api::users::get_user_by_username,
        crate::api::users::update_user,
        crate::api::auth::login,
        crate::api::auth::logout,
        crate::api::health::health_check,
        crate::api::health::live_check,
        crate::api::health::ping,
    ),
    components(schemas(
        AccountResponse,
        AccountSession,
        ApiErrorResponse,
        ClientUserView,
        GeneralResponse,
        HealthResponse,
        HealthStatus,
        LoginRequest,
        LogoutAck,
        PingApplication,
        PingResponse,
        RegistrationRequest,
        UpdateRequest,
        ValidationFailure,
        WrappedUser,
    )),
    tags(
        (name = "users", description = "User registration, lookup and update"),
        (name = "auth", description = "Login and logout"),
        (name = "health", description = "Health probes")
    )
)]
pub struct ApiDoc;

/// Build the document with its server URL pointing at `public_url`
pub fn openapi_document(public_url: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![Server::new(public_url)]);
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_routes_documented() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/users",
            "/users/{user_id}",
            "/users/username/{username}",
            "/auth/login",
            "/auth/logout",
            "/health",
            "/live",
            "/ping",
        ] {
            assert!(paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn test_access_token_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");

        assert!(components.security_schemes.contains_key("AccessToken"));
    }

    #[test]
    fn test_server_url_is_set() {
        let doc = openapi_document("http://localhost:3000");
        let servers = doc.servers.expect("servers");

        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].url, "http://localhost:3000");
    }

    #[test]
    fn test_password_hash_not_in_user_schema() {
        let json = ApiDoc::openapi().to_json().unwrap();

        assert!(!json.contains("password_hash"));
    }
}
