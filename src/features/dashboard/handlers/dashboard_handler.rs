use axum::{extract::State, Json};
use std::sync::Arc;

use crate::core::error::AppError;
use crate::features::dashboard::dtos::DashboardSummaryDto;
use crate::features::dashboard::services::DashboardService;
use crate::shared::types::ErrorResponse;

/// Get dashboard summary counts
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "dashboard",
    responses(
        (status = 200, description = "Dashboard summary", body = DashboardSummaryDto),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_summary(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<DashboardSummaryDto>, AppError> {
    let summary = service.summary().await?;
    Ok(Json(summary.into()))
}
