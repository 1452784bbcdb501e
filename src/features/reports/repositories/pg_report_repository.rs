use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{Report, ReportStatus};
use crate::features::reports::repositories::ReportRepository;

const REPORT_COLUMNS: &str =
    "id, location, coordinates, description, image_path, image_name, severity, status, date";

pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    async fn insert(&self, report: Report) -> Result<Report> {
        let sql = format!(
            r#"
            INSERT INTO reports (id, location, coordinates, description, image_path, image_name, severity, status, date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            REPORT_COLUMNS
        );

        sqlx::query_as::<_, Report>(&sql)
            .bind(report.id)
            .bind(&report.location)
            .bind(&report.coordinates)
            .bind(&report.description)
            .bind(&report.image_path)
            .bind(&report.image_name)
            .bind(report.severity)
            .bind(report.status)
            .bind(report.date)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert report: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn list(&self) -> Result<Vec<Report>> {
        let sql = format!("SELECT {} FROM reports ORDER BY date DESC", REPORT_COLUMNS);

        sqlx::query_as::<_, Report>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list reports: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Report>> {
        let sql = format!("SELECT {} FROM reports WHERE id = $1", REPORT_COLUMNS);

        sqlx::query_as::<_, Report>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch report {}: {:?}", id, e);
                AppError::Database(e)
            })
    }

    async fn update_status(&self, id: Uuid, status: ReportStatus) -> Result<Option<Report>> {
        let sql = format!(
            "UPDATE reports SET status = $2 WHERE id = $1 RETURNING {}",
            REPORT_COLUMNS
        );

        sqlx::query_as::<_, Report>(&sql)
            .bind(id)
            .bind(status)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update status of report {}: {:?}", id, e);
                AppError::Database(e)
            })
    }
}
