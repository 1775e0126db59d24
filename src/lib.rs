//! User account API
//!
//! Registration, login, logout, lookup and profile updates for user accounts,
//! served over HTTP with token authentication.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::auth::{JwtConfig, JwtService};
use infrastructure::user::{Argon2Hasher, InMemoryUserRecordStore};

/// Create application state from configuration
pub fn create_app_state(config: &AppConfig) -> AppState {
    if config.auth.jwt_secret == JwtConfig::default().secret {
        tracing::warn!("Using the default JWT secret; set APP__AUTH__JWT_SECRET");
    }

    let hasher = Arc::new(Argon2Hasher::new());
    let store = Arc::new(InMemoryUserRecordStore::new(hasher));
    let tokens = Arc::new(JwtService::new(JwtConfig::new(
        config.auth.jwt_secret.clone(),
        config.auth.token_expiration_hours,
    )));

    tracing::info!(
        token_expiration_hours = config.auth.token_expiration_hours,
        "Application state created with in-memory user store"
    );

    AppState::new(store, tokens)
}
