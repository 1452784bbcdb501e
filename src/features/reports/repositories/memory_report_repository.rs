use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{Report, ReportStatus};
use crate::features::reports::repositories::ReportRepository;

/// Process-local report store, kept in insertion order
#[derive(Default)]
pub struct InMemoryReportRepository {
    reports: RwLock<Vec<Report>>,
}

impl InMemoryReportRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReportRepository for InMemoryReportRepository {
    async fn insert(&self, report: Report) -> Result<Report> {
        let mut reports = self.reports.write().await;
        if reports.iter().any(|r| r.id == report.id) {
            return Err(AppError::Conflict(format!(
                "Report {} already exists",
                report.id
            )));
        }
        reports.push(report.clone());
        Ok(report)
    }

    async fn list(&self) -> Result<Vec<Report>> {
        // newest insert first among equal dates
        let mut reports: Vec<Report> = self.reports.read().await.iter().rev().cloned().collect();
        reports.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(reports)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Report>> {
        Ok(self
            .reports
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn update_status(&self, id: Uuid, status: ReportStatus) -> Result<Option<Report>> {
        let mut reports = self.reports.write().await;
        Ok(reports.iter_mut().find(|r| r.id == id).map(|report| {
            report.status = status;
            report.clone()
        }))
    }
}
