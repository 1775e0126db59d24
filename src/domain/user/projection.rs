//! Client-safe projection of a user record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entity::User;

/// The subset of a [`User`] that may be returned to a client.
///
/// Carries no credential material; there is no field to put it in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClientUserView {
    pub id: String,
    #[schema(example = "ann")]
    pub username: String,
    #[schema(example = "a@x.com")]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for ClientUserView {
    fn from(user: &User) -> Self {
        let profile = user.profile();

        Self {
            id: user.id().as_str().to_string(),
            username: user.username().to_string(),
            email: profile.email.clone(),
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }
}

/// `{user: ClientUserView}` wrapper returned by username lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WrappedUser {
    pub user: ClientUserView,
}
