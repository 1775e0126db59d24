//! Authentication infrastructure module
//!
//! This module provides JWT token management and the login/logout flow.

mod flow;
mod jwt;

pub use flow::{AccountSession, AuthFlow, LogoutAck};
pub use jwt::{AuthToken, JwtConfig, JwtService, TokenClaims, TokenIssuer};
