use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::reports::dtos::{
    CreateReportFormDto, ReportResponseDto, UpdateReportStatusDto,
};
use crate::features::reports::handlers::parse_report_multipart;
use crate::features::reports::services::ReportService;
use crate::shared::types::ErrorResponse;

/// List all reports, newest first
#[utoipa::path(
    get,
    path = "/api/reports",
    responses(
        (status = 200, description = "All reports, newest first", body = Vec<ReportResponseDto>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "reports"
)]
pub async fn list_reports(
    State(service): State<Arc<ReportService>>,
) -> Result<Json<Vec<ReportResponseDto>>> {
    let reports = service.list().await?;
    Ok(Json(reports.into_iter().map(ReportResponseDto::from).collect()))
}

/// Get report by ID
#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    params(
        ("id" = String, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report found", body = ReportResponseDto),
        (status = 404, description = "Report not found", body = ErrorResponse)
    ),
    tag = "reports"
)]
pub async fn get_report(
    State(service): State<Arc<ReportService>>,
    Path(id): Path<String>,
) -> Result<Json<ReportResponseDto>> {
    let report = service.get_by_raw_id(&id).await?;
    Ok(Json(report.into()))
}

/// Submit a new pollution report
///
/// Accepts multipart/form-data with `location` and `description` (required),
/// `coordinates` and `severity` (optional) and an optional `image` file.
#[utoipa::path(
    post,
    path = "/api/reports",
    request_body(
        content = CreateReportFormDto,
        content_type = "multipart/form-data",
        description = "Report form with an optional photo",
    ),
    responses(
        (status = 201, description = "Report created", body = ReportResponseDto),
        (status = 400, description = "Missing fields or rejected image", body = ErrorResponse),
        (status = 413, description = "Request body too large", body = ErrorResponse)
    ),
    tag = "reports"
)]
pub async fn create_report(
    State(service): State<Arc<ReportService>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ReportResponseDto>)> {
    let submission = parse_report_multipart(multipart).await?;
    let report = service.create(submission).await?;
    Ok((StatusCode::CREATED, Json(report.into())))
}

/// Update report status
#[utoipa::path(
    patch,
    path = "/api/reports/{id}",
    params(
        ("id" = String, Path, description = "Report ID")
    ),
    request_body = UpdateReportStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ReportResponseDto),
        (status = 400, description = "Unknown status value", body = ErrorResponse),
        (status = 404, description = "Report not found", body = ErrorResponse)
    ),
    tag = "reports"
)]
pub async fn update_report_status(
    State(service): State<Arc<ReportService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateReportStatusDto>,
) -> Result<Json<ReportResponseDto>> {
    let report = service.update_status(&id, &dto.status).await?;
    Ok(Json(report.into()))
}
