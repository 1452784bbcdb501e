//! Persistence seam for reports
//!
//! `PgReportRepository` backs production deployments; `InMemoryReportRepository`
//! is used when no database is configured and by the test suite.

mod memory_report_repository;
mod pg_report_repository;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::reports::models::{Report, ReportStatus};

pub use memory_report_repository::InMemoryReportRepository;
pub use pg_report_repository::PgReportRepository;

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Persist a fully populated report and return the stored row
    async fn insert(&self, report: Report) -> Result<Report>;

    /// All reports, newest `date` first
    async fn list(&self) -> Result<Vec<Report>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Report>>;

    /// Overwrite `status` only. Returns `None` when the id does not exist.
    async fn update_status(&self, id: Uuid, status: ReportStatus) -> Result<Option<Report>>;
}
