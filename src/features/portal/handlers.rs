use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::core::error::AppError;
use crate::features::dashboard::DashboardService;
use crate::features::portal::views::{self, NO_REPORT_ID_MESSAGE, REPORT_NOT_FOUND_MESSAGE};
use crate::features::reports::ReportService;

/// State for portal page handlers
#[derive(Clone)]
pub struct PortalState {
    pub report_service: Arc<ReportService>,
    pub dashboard_service: Arc<DashboardService>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReportViewQuery {
    pub id: Option<String>,
    pub updated: Option<String>,
}

impl ReportViewQuery {
    fn report_id(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }

    fn was_updated(&self) -> bool {
        self.updated.as_deref().is_some_and(|v| v == "1")
    }
}

#[derive(Debug, Deserialize)]
pub struct StatusForm {
    #[serde(default)]
    pub status: String,
}

fn message_page(status: StatusCode, message: &str) -> Result<Response, AppError> {
    let html = views::render_report_message(message)?;
    Ok((status, Html(html)).into_response())
}

pub async fn dashboard(State(state): State<PortalState>) -> Result<Html<String>, AppError> {
    let stats = state.dashboard_service.summary_or_empty().await;
    Ok(Html(views::render_dashboard(&stats)?))
}

pub async fn reports(State(state): State<PortalState>) -> Result<Html<String>, AppError> {
    let reports = state.report_service.list().await.unwrap_or_else(|e| {
        tracing::error!("Failed to load reports for portal table: {}", e);
        Vec::new()
    });
    Ok(Html(views::render_reports(&reports)?))
}

pub async fn report_detail(
    State(state): State<PortalState>,
    Query(query): Query<ReportViewQuery>,
) -> Result<Response, AppError> {
    let Some(id) = query.report_id() else {
        return message_page(StatusCode::BAD_REQUEST, NO_REPORT_ID_MESSAGE);
    };

    match state.report_service.get_by_raw_id(id).await {
        Ok(report) => {
            let html = views::render_report_detail(&report, query.was_updated(), None)?;
            Ok(Html(html).into_response())
        }
        Err(AppError::NotFound(_)) => message_page(StatusCode::NOT_FOUND, REPORT_NOT_FOUND_MESSAGE),
        Err(e) => Err(e),
    }
}

pub async fn update_report_status(
    State(state): State<PortalState>,
    Query(query): Query<ReportViewQuery>,
    Form(form): Form<StatusForm>,
) -> Result<Response, AppError> {
    let Some(id) = query.report_id() else {
        return message_page(StatusCode::BAD_REQUEST, NO_REPORT_ID_MESSAGE);
    };

    match state.report_service.update_status(id, &form.status).await {
        Ok(report) => {
            let target = format!("{}&updated=1", views::detail_url(&report.id.to_string()));
            Ok(Redirect::to(&target).into_response())
        }
        Err(AppError::NotFound(_)) => message_page(StatusCode::NOT_FOUND, REPORT_NOT_FOUND_MESSAGE),
        Err(e @ AppError::Validation(_)) => {
            tracing::warn!("Rejected status update for report {}: {}", id, e);
            let report = state.report_service.get_by_raw_id(id).await?;
            let html =
                views::render_report_detail(&report, false, Some(&e.public_message()))?;
            Ok((StatusCode::BAD_REQUEST, Html(html)).into_response())
        }
        Err(e) => Err(e),
    }
}
