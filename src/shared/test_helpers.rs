use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use crate::core::config::AuthConfig;
use crate::features::auth::{AuthService, InMemoryUserRepository, TokenService};
use crate::features::citizen::CitizenState;
use crate::features::dashboard::DashboardService;
use crate::features::portal::PortalState;
use crate::features::reports::models::ReportSeverity;
use crate::features::reports::services::FixedSeverity;
use crate::features::reports::{InMemoryReportRepository, ReportService};
use crate::modules::storage::LocalStorage;

const TEST_JWT_SECRET: &str = "test-secret-with-enough-length-for-hs256";
const TEST_PUBLIC_BASE_URL: &str = "http://localhost:5000";

/// Services wired against in-memory stores and a temporary upload directory.
///
/// New reports always get `Medium` severity so assertions stay deterministic.
pub struct TestContext {
    upload_root: TempDir,
    pub report_service: Arc<ReportService>,
    pub auth_service: Arc<AuthService>,
    pub dashboard_service: Arc<DashboardService>,
}

impl TestContext {
    pub fn new() -> Self {
        let upload_root = TempDir::new().unwrap();
        let storage = LocalStorage::new(
            upload_root.path().join("uploads"),
            TEST_PUBLIC_BASE_URL,
            "/uploads",
        );

        let report_service = Arc::new(ReportService::new(
            Arc::new(InMemoryReportRepository::new()),
            Arc::new(storage),
            Arc::new(FixedSeverity(ReportSeverity::Medium)),
        ));

        let token_service = Arc::new(TokenService::new(&test_auth_config()));
        let auth_service = Arc::new(AuthService::new(
            Arc::new(InMemoryUserRepository::new()),
            token_service,
        ));

        let dashboard_service = Arc::new(DashboardService::new(report_service.clone()));

        Self {
            upload_root,
            report_service,
            auth_service,
            dashboard_service,
        }
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.upload_root.path().join("uploads")
    }

    pub fn citizen_state(&self) -> CitizenState {
        CitizenState {
            report_service: self.report_service.clone(),
            auth_service: self.auth_service.clone(),
        }
    }

    pub fn portal_state(&self) -> PortalState {
        PortalState {
            report_service: self.report_service.clone(),
            dashboard_service: self.dashboard_service.clone(),
        }
    }
}

fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: TEST_JWT_SECRET.to_string(),
        jwt_expiry_secs: 3600,
    }
}
