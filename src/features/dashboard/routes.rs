use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::dashboard::handlers;
use crate::features::dashboard::services::DashboardService;

/// Create public dashboard routes
pub fn routes(dashboard_service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/api/dashboard/summary", get(handlers::get_summary))
        .with_state(dashboard_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::dashboard::dtos::DashboardSummaryDto;
    use crate::features::reports::dtos::{CreateReportDto, ReportSubmission};
    use crate::shared::test_helpers::TestContext;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_summary_counts_submitted_reports() {
        let ctx = TestContext::new();
        for severity in ["High", "High", "Low"] {
            ctx.report_service
                .create(ReportSubmission {
                    fields: CreateReportDto {
                        location: "Canal".to_string(),
                        description: "Plastic waste".to_string(),
                        severity: Some(severity.to_string()),
                        ..Default::default()
                    },
                    image: None,
                })
                .await
                .unwrap();
        }
        let server = TestServer::new(routes(ctx.dashboard_service.clone())).unwrap();

        let summary: DashboardSummaryDto = server.get("/api/dashboard/summary").await.json();

        assert_eq!(
            summary,
            DashboardSummaryDto {
                total: 3,
                today: 3,
                hotspots: 2,
                pending: 3,
            }
        );
    }
}
