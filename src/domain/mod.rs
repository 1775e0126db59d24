//! Domain layer - Core business logic and entities

pub mod error;
pub mod user;

pub use error::DomainError;
pub use user::{
    ClientUserView, LoginRequest, RegistrationRequest, RegistrationValidator, StoreFailure,
    StoreFailureKind, UpdateRequest, User, UserId, UserRecordStore, ValidationFailure,
};
