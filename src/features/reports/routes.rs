use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::features::reports::handlers;
use crate::features::reports::services::ReportService;
use crate::modules::storage::MAX_IMAGE_SIZE;

/// Create routes for the reports feature
pub fn routes(report_service: Arc<ReportService>) -> Router {
    Router::new()
        .route(
            "/api/reports",
            get(handlers::list_reports).post(handlers::create_report).layer(
                // MAX_IMAGE_SIZE plus headroom for the multipart envelope and text fields
                DefaultBodyLimit::max(MAX_IMAGE_SIZE + 1024 * 1024),
            ),
        )
        .route(
            "/api/reports/{id}",
            get(handlers::get_report).patch(handlers::update_report_status),
        )
        .with_state(report_service)
}
