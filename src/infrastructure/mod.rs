//! Infrastructure layer - Store, token and flow implementations

pub mod auth;
pub mod logging;
pub mod user;
