use std::sync::Arc;

use axum::{extract::Extension, Json};
use chrono::Utc;

use crate::app::dto::{self, DatabaseHealthResponse, HealthResponse, ServiceBanner};
use crate::app::errors::ApiError;
use crate::app::AppState;
use crate::probe::ProbeError;

#[utoipa::path(
    get,
    path = "/",
    tag = "system",
    responses((status = 200, description = "Service banner", body = ServiceBanner))
)]
pub async fn root() -> Json<ServiceBanner> {
    Json(ServiceBanner {
        message: dto::API_NAME,
        version: dto::API_VERSION,
        docs: "/api/docs",
        health: "/api/health",
    })
}

/// Liveness: answers whenever the process is serving requests.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses((status = 200, description = "Process is running", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "NetworkSync API is running successfully",
        timestamp: Utc::now(),
        version: dto::API_VERSION,
    })
}

/// Connectivity probe against the hosted database service.
#[utoipa::path(
    get,
    path = "/api/health/database",
    tag = "health",
    responses(
        (status = 200, description = "Database reachable", body = DatabaseHealthResponse),
        (status = 503, description = "Database not configured or not answering", body = crate::app::errors::ErrorBody)
    )
)]
pub async fn database_health(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<DatabaseHealthResponse>, ApiError> {
    let probe = state
        .database_probe
        .as_ref()
        .ok_or_else(|| ApiError::service_unavailable("Database configuration missing"))?;

    match probe.check().await {
        Ok(()) => Ok(Json(DatabaseHealthResponse {
            status: "healthy",
            message: "Database connection successful",
            timestamp: Utc::now(),
        })),
        Err(ProbeError::UnexpectedStatus(status)) => {
            tracing::warn!(status, "database probe returned non-success status");
            Err(ApiError::service_unavailable(format!(
                "Database connection failed: {status}"
            )))
        }
        Err(e) => {
            // Transport detail stays in the logs.
            tracing::warn!(error = %e, "database probe failed");
            Err(ApiError::service_unavailable("Database connection error"))
        }
    }
}
