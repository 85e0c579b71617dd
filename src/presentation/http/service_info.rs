use axum::{Json, Router, extract::State, routing::get};

use crate::application::services::service_info::ServiceInfo;
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::envelope::ApiResponse;
use crate::presentation::http::error::ApiError;

/// Failures forward to the shared dispatch point like every other endpoint;
/// unclassified ones still surface as a generic 500 envelope.
#[utoipa::path(
    get,
    path = "/info",
    tag = "ServiceInfo",
    responses((status = 200, description = "Service-info snapshot envelope"))
)]
pub async fn get_service_info(
    State(ctx): State<AppContext>,
) -> Result<Json<ApiResponse<ServiceInfo>>, ApiError> {
    let info = ctx.service_info().get_service_info().await?;
    Ok(Json(ApiResponse::success(200, info)))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/info", get(get_service_info))
        .with_state(ctx)
}
