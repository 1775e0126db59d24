//! Response envelopes wrapping flow results

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::infrastructure::auth::{AccountSession, LogoutAck};

/// `{"account": {user, token}}` returned by register and login
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccountResponse {
    pub account: AccountSession,
}

/// `{"general": {message, success}}` returned by logout
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GeneralResponse {
    pub general: LogoutAck,
}
