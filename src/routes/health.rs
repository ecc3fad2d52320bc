use axum::{extract::State, response::Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    /// "up", "down" or "disconnected"
    pub database: String,
}

/// Health check endpoint
///
/// Always answers 200; the database field reports storage reachability.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    let database = if !state.gateway.is_connected() {
        "disconnected"
    } else {
        match state.gateway.ping().await {
            Ok(()) => "up",
            Err(e) => {
                tracing::warn!("Database ping failed: {}", e);
                "down"
            }
        }
    };

    Json(HealthStatus {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
    })
}
