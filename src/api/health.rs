//! Health check endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::state::AppState;
use crate::api::types::Json;

/// Health response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
}

/// Health check status
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// Simple health check - returns 200 if the service is running
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse)),
    tag = "health",
    operation_id = "health"
)]
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/live",
    responses((status = 200, description = "Process is alive")),
    tag = "health",
    operation_id = "live"
)]
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Ping response with process uptime
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PingResponse {
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    /// Seconds since the server started
    pub uptime: f64,
    pub application: PingApplication,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PingApplication {
    pub name: String,
    pub version: String,
    pub pid: u32,
}

/// Ping with uptime and process details
#[utoipa::path(
    get,
    path = "/ping",
    responses((status = 200, description = "Process details", body = PingResponse)),
    tag = "health",
    operation_id = "ping"
)]
pub async fn ping(State(state): State<AppState>) -> Json<PingResponse> {
    let now = Utc::now();
    let uptime = (now - state.started_at).num_milliseconds().max(0) as f64 / 1000.0;

    Json(PingResponse {
        timestamp: now.timestamp_millis(),
        uptime,
        application: PingApplication {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            pid: std::process::id(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_serialization() {
        assert_eq!(
            serde_json::to_string(&HealthStatus::Healthy).unwrap(),
            "\"healthy\""
        );
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: HealthStatus::Healthy,
            version: "1.0.0".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"healthy\""));
        assert!(json.contains("\"version\":\"1.0.0\""));
    }
}
