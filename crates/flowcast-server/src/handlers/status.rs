//! Service status handlers (health, home, fallback)

use axum::{http::Uri, Json};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use crate::{AppError, SERVICE_NAME};

/// Response for the health check
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// RFC 3339 timestamp
    pub time: String,
    pub service: &'static str,
}

/// GET /api/health - Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        time: Utc::now().to_rfc3339(),
        service: SERVICE_NAME,
    })
}

/// GET / - Service metadata and endpoint directory
pub async fn home() -> Json<serde_json::Value> {
    Json(json!({
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "analyze": "POST /api/analyze",
            "health": "GET /api/health",
        },
        "status": "running",
        "time": Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    }))
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(&format!("No route for {}", uri.path()))
}
