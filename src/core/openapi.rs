use utoipa::{Modify, OpenApi};

use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Reports
        reports_handlers::list_reports,
        reports_handlers::get_report,
        reports_handlers::create_report,
        reports_handlers::update_report_status,
        // Dashboard
        dashboard_handlers::get_summary,
        // Auth
        auth_handlers::register,
        auth_handlers::login,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            // Reports
            reports_models::ReportStatus,
            reports_models::ReportSeverity,
            reports_dtos::ReportResponseDto,
            reports_dtos::CreateReportFormDto,
            reports_dtos::UpdateReportStatusDto,
            // Dashboard
            dashboard_dtos::DashboardSummaryDto,
            // Auth
            auth_dtos::RegisterRequestDto,
            auth_dtos::LoginRequestDto,
            auth_dtos::AuthResponseDto,
            auth_dtos::AuthUserDto,
        )
    ),
    tags(
        (name = "reports", description = "Pollution reports submitted by citizens"),
        (name = "dashboard", description = "Summary counts for the official portal"),
        (name = "auth", description = "Citizen registration and login"),
    ),
    info(
        title = "DumpDetect API",
        version = "0.1.0",
        description = "API documentation for DumpDetect",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
