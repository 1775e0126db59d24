//! Login and logout orchestration

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::domain::user::{ClientUserView, LoginRequest, UserRecordStore};
use crate::domain::DomainError;

use super::jwt::{AuthToken, TokenClaims, TokenIssuer};

/// Projected user together with a freshly issued token
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccountSession {
    pub user: ClientUserView,
    pub token: AuthToken,
}

/// Acknowledgement returned by logout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LogoutAck {
    #[schema(example = "user logged out")]
    pub message: String,
    pub success: bool,
}

/// Authentication flow over the record store and the token issuer
#[derive(Debug, Clone)]
pub struct AuthFlow {
    store: Arc<dyn UserRecordStore>,
    tokens: Arc<dyn TokenIssuer>,
}

impl AuthFlow {
    pub fn new(store: Arc<dyn UserRecordStore>, tokens: Arc<dyn TokenIssuer>) -> Self {
        Self { store, tokens }
    }

    /// Verify credentials through the store and issue a token on success.
    ///
    /// Any store failure becomes `Unauthorized` carrying the store's message.
    pub async fn login(&self, request: &LoginRequest) -> Result<AccountSession, DomainError> {
        let user = self
            .store
            .check_credentials(request)
            .await
            .map_err(|failure| {
                warn!(kind = ?failure.kind(), "Login rejected");
                DomainError::unauthorized(failure.message())
            })?;

        let token = self.tokens.issue(user.id())?;

        info!(user_id = %user.id(), "User logged in");

        Ok(AccountSession {
            user: ClientUserView::from(&user),
            token,
        })
    }

    /// Acknowledge a logout.
    ///
    /// The presented token is not revoked and stays valid until it expires.
    pub fn logout(&self, claims: &TokenClaims) -> LogoutAck {
        info!(user_id = %claims.user_id(), "User logged out");

        LogoutAck {
            message: "user logged out".to_string(),
            success: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{MockUserRecordStore, StoreFailure, User, UserId, UserProfile};
    use crate::infrastructure::auth::jwt::{JwtConfig, JwtService};

    fn jwt() -> Arc<JwtService> {
        Arc::new(JwtService::new(JwtConfig::new("flow-test-secret", 1)))
    }

    fn stored_user() -> User {
        User::new(
            UserId::new("user-1").unwrap(),
            "ann",
            "hash",
            UserProfile {
                email: "a@x.com".to_string(),
                ..Default::default()
            },
        )
    }

    fn login_request(password: &str) -> LoginRequest {
        LoginRequest {
            username: Some("ann".to_string()),
            id: None,
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_issues_token_for_stored_id() {
        let mut store = MockUserRecordStore::new();
        store
            .expect_check_credentials()
            .times(1)
            .returning(|_| Ok(stored_user()));
        let tokens = jwt();
        let flow = AuthFlow::new(Arc::new(store), tokens.clone());

        let session = flow.login(&login_request("Str0ng!pw")).await.unwrap();

        assert_eq!(session.user.id, "user-1");
        assert_eq!(session.user.username, "ann");
        let claims = tokens.validate(session.token.as_str()).unwrap();
        assert_eq!(claims.user_id(), "user-1");
    }

    #[tokio::test]
    async fn test_login_failure_carries_store_message() {
        let mut store = MockUserRecordStore::new();
        store
            .expect_check_credentials()
            .returning(|_| Err(StoreFailure::rejected("Invalid username or password")));
        let flow = AuthFlow::new(Arc::new(store), jwt());

        let error = flow.login(&login_request("wrong")).await.unwrap_err();

        match error {
            DomainError::Unauthorized { message } => {
                assert_eq!(message, "Invalid username or password")
            }
            other => panic!("expected Unauthorized, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_backend_failure_is_unauthorized() {
        let mut store = MockUserRecordStore::new();
        store
            .expect_check_credentials()
            .returning(|_| Err(StoreFailure::backend("connection reset")));
        let flow = AuthFlow::new(Arc::new(store), jwt());

        let error = flow.login(&login_request("Str0ng!pw")).await.unwrap_err();
        assert!(matches!(error, DomainError::Unauthorized { .. }));
    }

    #[test]
    fn test_logout_acknowledges() {
        let flow = AuthFlow::new(Arc::new(MockUserRecordStore::new()), jwt());
        let claims = TokenClaims::new(&UserId::new("user-1").unwrap(), chrono::Utc::now(), 1);

        let ack = flow.logout(&claims);

        assert!(ack.success);
        assert_eq!(ack.message, "user logged out");
    }
}
