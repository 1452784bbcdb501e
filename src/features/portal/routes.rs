use axum::{routing::get, Router};

use crate::features::portal::handlers::{self, PortalState};

/// Server-rendered pages for officials
pub fn routes(state: PortalState) -> Router {
    Router::new()
        .route("/portal", get(handlers::dashboard))
        .route("/portal/reports", get(handlers::reports))
        .route(
            "/portal/reports/view",
            get(handlers::report_detail).post(handlers::update_report_status),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::dtos::{CreateReportDto, ReportSubmission};
    use crate::features::reports::models::{Report, ReportStatus};
    use crate::shared::test_helpers::TestContext;
    use axum::http::{header, StatusCode};
    use axum_test::TestServer;
    use serde_json::json;

    fn server(ctx: &TestContext) -> TestServer {
        TestServer::new(routes(ctx.portal_state())).unwrap()
    }

    async fn seed(ctx: &TestContext, location: &str, severity: Option<&str>) -> Report {
        ctx.report_service
            .create(ReportSubmission {
                fields: CreateReportDto {
                    location: location.to_string(),
                    description: "Plastic waste piling up along the embankment wall"
                        .to_string(),
                    severity: severity.map(str::to_string),
                    ..Default::default()
                },
                image: None,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_dashboard_counts_reports() {
        let ctx = TestContext::new();
        seed(&ctx, "River X", Some("High")).await;
        seed(&ctx, "Lake Y", Some("Low")).await;
        let server = server(&ctx);

        let response = server.get("/portal").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("Total Reports Received"));
        assert!(html.contains("<div class=\"value\">2</div>"));
    }

    #[tokio::test]
    async fn test_reports_table_lists_rows() {
        let ctx = TestContext::new();
        let report = seed(&ctx, "River X", None).await;
        let server = server(&ctx);

        let html = server.get("/portal/reports").await.text();

        let short_id: String = report.id.to_string().chars().take(8).collect();
        assert!(html.contains(&format!("{}...", short_id)));
        assert!(html.contains("River X"));
        assert!(html.contains("Pending"));
        assert!(!html.contains("No reports found"));
    }

    #[tokio::test]
    async fn test_reports_table_empty() {
        let ctx = TestContext::new();
        let server = server(&ctx);

        let response = server.get("/portal/reports").await;

        response.assert_status_ok();
        assert!(response.text().contains("No reports found"));
    }

    #[tokio::test]
    async fn test_detail_without_id() {
        let ctx = TestContext::new();
        let server = server(&ctx);

        let response = server.get("/portal/reports/view").await;

        response.assert_status_bad_request();
        assert!(response.text().contains("No Report ID provided"));
    }

    #[tokio::test]
    async fn test_detail_unknown_id() {
        let ctx = TestContext::new();
        let server = server(&ctx);

        let response = server
            .get(&format!("/portal/reports/view?id={}", uuid::Uuid::new_v4()))
            .await;

        response.assert_status_not_found();
        assert!(response.text().contains("Report not found"));
    }

    #[tokio::test]
    async fn test_detail_shows_report() {
        let ctx = TestContext::new();
        let report = seed(&ctx, "River X", Some("High")).await;
        let server = server(&ctx);

        let response = server
            .get(&format!("/portal/reports/view?id={}", report.id))
            .await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains(&format!("Report Details: {}", report.id)));
        assert!(html.contains("<option value=\"Pending\" selected>"));
        assert!(!html.contains("Status updated successfully!"));
    }

    #[tokio::test]
    async fn test_update_status_redirects_with_notice() {
        let ctx = TestContext::new();
        let report = seed(&ctx, "River X", None).await;
        let server = server(&ctx);

        let response = server
            .post(&format!("/portal/reports/view?id={}", report.id))
            .form(&json!({ "status": "Resolved" }))
            .await;

        response.assert_status(StatusCode::SEE_OTHER);
        let location = response.header(header::LOCATION);
        assert_eq!(
            location.to_str().unwrap(),
            format!("/portal/reports/view?id={}&updated=1", report.id)
        );

        let stored = ctx.report_service.get_by_id(report.id).await.unwrap();
        assert_eq!(stored.status, ReportStatus::Resolved);

        let html = server
            .get(&format!("/portal/reports/view?id={}&updated=1", report.id))
            .await
            .text();
        assert!(html.contains("Status updated successfully!"));
        assert!(html.contains("<option value=\"Resolved\" selected>"));
    }

    #[tokio::test]
    async fn test_update_status_rejects_unknown_status() {
        let ctx = TestContext::new();
        let report = seed(&ctx, "River X", None).await;
        let server = server(&ctx);

        let response = server
            .post(&format!("/portal/reports/view?id={}", report.id))
            .form(&json!({ "status": "Closed" }))
            .await;

        response.assert_status_bad_request();
        assert!(response.text().contains("banner error"));

        let stored = ctx.report_service.get_by_id(report.id).await.unwrap();
        assert_eq!(stored.status, ReportStatus::Pending);
    }

    #[tokio::test]
    async fn test_update_status_unknown_report() {
        let ctx = TestContext::new();
        let server = server(&ctx);

        let response = server
            .post(&format!("/portal/reports/view?id={}", uuid::Uuid::new_v4()))
            .form(&json!({ "status": "Resolved" }))
            .await;

        response.assert_status_not_found();
        assert!(response.text().contains("Report not found"));
    }
}
