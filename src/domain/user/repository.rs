//! User record store trait and its failure type

use async_trait::async_trait;
use serde::Serialize;
use std::fmt::Debug;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

use super::entity::{User, UserId};
use super::requests::{LoginRequest, RegistrationRequest, UpdateRequest};

/// Category of a store failure, which fixes its HTTP status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreFailureKind {
    /// No record matched the lookup
    NotFound,
    /// The write would break a uniqueness constraint
    Conflict,
    /// The store refused the request, e.g. wrong credentials
    Rejected,
    /// The backing storage itself failed
    Backend,
}

impl StoreFailureKind {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::Rejected => 401,
            Self::Backend => 500,
        }
    }
}

/// Failure reported by a [`UserRecordStore`] operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StoreFailure {
    kind: StoreFailureKind,
    message: String,
}

impl StoreFailure {
    pub fn new(kind: StoreFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StoreFailureKind::NotFound, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StoreFailureKind::Conflict, message)
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::new(StoreFailureKind::Rejected, message)
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::new(StoreFailureKind::Backend, message)
    }

    pub fn kind(&self) -> StoreFailureKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == StoreFailureKind::NotFound
    }
}

/// Persistence collaborator owning user records.
///
/// Every operation yields either the affected record or a [`StoreFailure`].
/// Username uniqueness and id immutability are the store's responsibility.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRecordStore: Send + Sync + Debug {
    /// Look up a user by id
    async fn find_by_id(&self, id: &UserId) -> Result<User, StoreFailure>;

    /// Look up a user by username
    async fn find_by_username(&self, username: &str) -> Result<User, StoreFailure>;

    /// Verify the presented credentials and return the matching user
    async fn check_credentials(&self, request: &LoginRequest) -> Result<User, StoreFailure>;

    /// Create a user from an already validated registration request
    async fn create(&self, request: &RegistrationRequest) -> Result<User, StoreFailure>;

    /// Apply the profile fields present in the request
    async fn update(&self, request: &UpdateRequest) -> Result<User, StoreFailure>;
}
