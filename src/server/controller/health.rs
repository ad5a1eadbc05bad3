use axum::{response::IntoResponse, Json};

use crate::model::api::{ApiResponse, HealthDto};

pub static HEALTH_TAG: &str = "health";

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is running", body = ApiResponse<HealthDto>)
    ),
)]
pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok(HealthDto {
        status: "ok".to_string(),
    }))
}
