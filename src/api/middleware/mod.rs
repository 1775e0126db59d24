//! API middleware components

pub mod logging;
pub mod security;
pub mod token_auth;

pub use logging::logging_middleware;
pub use security::security_headers_middleware;
pub use token_auth::{RequireToken, ACCESS_TOKEN_HEADER};
