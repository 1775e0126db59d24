use thiserror::Error;

use super::user::{StoreFailure, ValidationFailure};

/// Core domain errors raised by the account flows
#[derive(Debug, Error)]
pub enum DomainError {
    /// The request failed one or more validation checks
    #[error("incorrect input")]
    InvalidInput { failures: Vec<ValidationFailure> },

    #[error("{message}")]
    Unauthorized { message: String },

    #[error("{message}")]
    NotFound { message: String },

    /// Failure reported by the user record store, passed through unchanged
    #[error(transparent)]
    Store(#[from] StoreFailure),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn invalid_input(failures: Vec<ValidationFailure>) -> Self {
        Self::InvalidInput { failures }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
