//! User domain
//!
//! This module provides domain types and traits for user accounts,
//! including the user record, request payloads, validation, the client
//! projection, and the record store contract.

mod entity;
mod projection;
mod registration;
mod repository;
mod requests;
mod validation;

pub use entity::{User, UserId, UserProfile};
pub use projection::{ClientUserView, WrappedUser};
pub use registration::{check_registration_fields, check_update_fields, RegistrationValidator};
pub use repository::{StoreFailure, StoreFailureKind, UserRecordStore};
pub use requests::{LoginRequest, RegistrationRequest, UpdateRequest};
pub use validation::{
    validate_email, validate_name, validate_password, validate_user_id, validate_username,
    UserValidationError, ValidationFailure,
};

#[cfg(test)]
pub use repository::MockUserRecordStore;
