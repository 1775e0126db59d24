//! Registration, lookup and profile update orchestration

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::user::{
    check_update_fields, ClientUserView, RegistrationRequest, RegistrationValidator,
    UpdateRequest, UserId, UserRecordStore, WrappedUser,
};
use crate::domain::DomainError;
use crate::infrastructure::auth::{AccountSession, TokenIssuer};

const NO_SUCH_USER: &str = "no such user exist";

/// User account flow over the record store, validator and token issuer
#[derive(Debug, Clone)]
pub struct UserFlow {
    store: Arc<dyn UserRecordStore>,
    validator: RegistrationValidator,
    tokens: Arc<dyn TokenIssuer>,
}

impl UserFlow {
    pub fn new(store: Arc<dyn UserRecordStore>, tokens: Arc<dyn TokenIssuer>) -> Self {
        let validator = RegistrationValidator::new(store.clone());
        Self {
            store,
            validator,
            tokens,
        }
    }

    /// Validate, create the user, and sign them in
    pub async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<AccountSession, DomainError> {
        let failures = self.validator.validate(request).await?;
        if !failures.is_empty() {
            info!(?failures, "Registration rejected");
            return Err(DomainError::invalid_input(failures));
        }

        let user = self.store.create(request).await?;
        let token = self.tokens.issue(user.id())?;

        info!(user_id = %user.id(), username = %user.username(), "User registered");

        Ok(AccountSession {
            user: ClientUserView::from(&user),
            token,
        })
    }

    /// Look a user up by id.
    ///
    /// A store failure other than not-found is reported as `Unauthorized`.
    pub async fn get_by_id(&self, id: &str) -> Result<ClientUserView, DomainError> {
        let Ok(user_id) = UserId::new(id) else {
            debug!(id, "Malformed user id");
            return Err(DomainError::not_found(NO_SUCH_USER));
        };

        match self.store.find_by_id(&user_id).await {
            Ok(user) => Ok(ClientUserView::from(&user)),
            Err(failure) if failure.is_not_found() => Err(DomainError::not_found(NO_SUCH_USER)),
            Err(failure) => Err(DomainError::unauthorized(failure.message())),
        }
    }

    /// Look a user up by username; store failures pass through unchanged
    pub async fn get_by_username(&self, username: &str) -> Result<WrappedUser, DomainError> {
        let user = self.store.find_by_username(username).await?;

        Ok(WrappedUser {
            user: ClientUserView::from(&user),
        })
    }

    /// Apply a partial profile update; store failures pass through unchanged
    pub async fn update(&self, request: &UpdateRequest) -> Result<ClientUserView, DomainError> {
        let failures = check_update_fields(request);
        if !failures.is_empty() {
            return Err(DomainError::invalid_input(failures));
        }

        let user = self.store.update(request).await?;

        info!(user_id = %user.id(), "User profile updated");

        Ok(ClientUserView::from(&user))
    }
}
