use axum::{Json, Router, routing::get};

use crate::presentation::http::envelope::ApiResponse;

/// Liveness probe. No dependencies; the envelope is identical regardless of
/// system state.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Literal liveness envelope"))
)]
pub async fn check_health() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse::success(200, "I'm alive!"))
}

pub fn routes() -> Router {
    Router::new().route("/health", get(check_health))
}
