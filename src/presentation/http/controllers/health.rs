// src/presentation/http/controllers/health.rs
use crate::presentation::http::{
    error::{HttpError, HttpResult},
    state::HttpState,
};
use crate::application::error::ApplicationError;
use axum::{Extension, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthStatus))
)]
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}

/// Readiness probe that round-trips the database.
#[utoipa::path(
    get,
    path = "/health/db",
    tag = "health",
    responses(
        (status = 200, description = "Database reachable", body = HealthStatus),
        (status = 500, description = "Database unreachable"),
    )
)]
pub async fn health_db(Extension(state): Extension<HttpState>) -> HttpResult<Json<HealthStatus>> {
    sqlx::query("SELECT 1")
        .execute(&state.db_pool)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "database health check failed");
            HttpError::from_error(ApplicationError::infrastructure("database unreachable"))
        })?;
    Ok(Json(HealthStatus { status: "ok" }))
}
