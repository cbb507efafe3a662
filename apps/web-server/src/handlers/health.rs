//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub database: &'static str,
}

/// Health check endpoint - returns server status.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let database = database_status(&state).await;

    let response = HealthResponse {
        status: if database == "down" { "degraded" } else { "ok" },
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        database,
    };

    HttpResponse::Ok().json(response)
}

#[cfg(feature = "postgres")]
async fn database_status(state: &AppState) -> &'static str {
    match &state.db {
        Some(pool) => match pool.ping().await {
            Ok(()) => "up",
            Err(e) => {
                tracing::warn!("Database health check failed: {}", e);
                "down"
            }
        },
        None => "not_configured",
    }
}

#[cfg(not(feature = "postgres"))]
async fn database_status(_state: &AppState) -> &'static str {
    "not_configured"
}
