//! Shared application state for API handlers

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::UserRecordStore;
use crate::infrastructure::auth::{AuthFlow, TokenIssuer};
use crate::infrastructure::user::UserFlow;

/// Application state shared across all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub auth: Arc<AuthFlow>,
    pub users: Arc<UserFlow>,
    pub tokens: Arc<dyn TokenIssuer>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Wire both flows over one store and one token issuer
    pub fn new(store: Arc<dyn UserRecordStore>, tokens: Arc<dyn TokenIssuer>) -> Self {
        Self {
            auth: Arc::new(AuthFlow::new(store.clone(), tokens.clone())),
            users: Arc::new(UserFlow::new(store, tokens.clone())),
            tokens,
            started_at: Utc::now(),
        }
    }
}
