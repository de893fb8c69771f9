pub mod openapi;
pub mod products;

use axum::{extract::State, http::StatusCode, http::Uri, Json};
use tracing::{debug, warn};

use crate::{
    error::AppError,
    health::{HealthReport, HealthStatus},
    AppState,
};

// ── GET /healthz/liveness ─────────────────────────────────────────────────────

/// Aggregated liveness. `Degraded` still answers 200.
#[utoipa::path(
    get,
    path = "/healthz/liveness",
    responses(
        (status = 200, description = "Healthy or Degraded", body = HealthReport),
        (status = 500, description = "Unhealthy", body = HealthReport)
    ),
    tag = "Health"
)]
pub async fn liveness(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let report = state.health.evaluate();

    if report.status == HealthStatus::Healthy {
        debug!(checks = report.checks.len(), "Liveness probe");
    } else {
        warn!(status = ?report.status, checks = report.checks.len(), "Liveness probe not healthy");
    }

    (report.status.http_status(), Json(report))
}

// ── Fallback ──────────────────────────────────────────────────────────────────

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
