//! Request payloads accepted by the account flows

use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;

/// Read a string field where `null` counts as absent
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Credentials presented at login. The user is identified by username or id.
#[derive(Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    #[schema(example = "ann")]
    pub username: Option<String>,
    pub id: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    #[schema(example = "Str0ng!pw")]
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("id", &self.id)
            .field("password", &"[hidden]")
            .finish()
    }
}

/// New account registration
#[derive(Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct RegistrationRequest {
    #[serde(deserialize_with = "null_as_empty")]
    #[schema(example = "ann")]
    pub username: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[schema(example = "Str0ng!pw")]
    pub password: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[schema(example = "a@x.com")]
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl std::fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("username", &self.username)
            .field("password", &"[hidden]")
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish()
    }
}

/// Partial profile update; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateRequest {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
