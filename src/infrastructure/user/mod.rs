//! User infrastructure module
//!
//! This module provides the Argon2 password hasher, the in-memory user
//! record store, and the user account flow.

mod flow;
mod password;
mod repository;

pub use flow::UserFlow;
pub use password::{Argon2Hasher, PasswordHasher};
pub use repository::InMemoryUserRecordStore;
