use chrono::Local;
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::dashboard::models::DashboardStats;
use crate::features::reports::ReportService;

/// Service for dashboard statistics
pub struct DashboardService {
    report_service: Arc<ReportService>,
}

impl DashboardService {
    pub fn new(report_service: Arc<ReportService>) -> Self {
        Self { report_service }
    }

    /// Counts over every stored report, "today" in server local time
    pub async fn summary(&self) -> Result<DashboardStats> {
        let reports = self.report_service.list().await?;
        Ok(DashboardStats::compute(&reports, &Local::now()))
    }

    /// Like `summary`, but a failed load counts as no reports at all
    pub async fn summary_or_empty(&self) -> DashboardStats {
        match self.summary().await {
            Ok(stats) => stats,
            Err(e) => {
                tracing::error!("Failed to load reports for dashboard: {}", e);
                DashboardStats::default()
            }
        }
    }
}
