use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::ReportSubmission;
use crate::features::reports::models::{Report, ReportSeverity, ReportStatus};
use crate::features::reports::repositories::ReportRepository;
use crate::features::reports::services::SeveritySource;
use crate::modules::storage::LocalStorage;
use crate::shared::validation::{non_blank, validation_message};

/// Coordinates stored when the citizen did not provide any
const UNKNOWN_COORDINATES: &str = "Unknown";

/// Service for report operations
pub struct ReportService {
    repository: Arc<dyn ReportRepository>,
    storage: Arc<LocalStorage>,
    severity_source: Arc<dyn SeveritySource>,
}

impl ReportService {
    pub fn new(
        repository: Arc<dyn ReportRepository>,
        storage: Arc<LocalStorage>,
        severity_source: Arc<dyn SeveritySource>,
    ) -> Self {
        Self {
            repository,
            storage,
            severity_source,
        }
    }

    /// All reports, newest first
    pub async fn list(&self) -> Result<Vec<Report>> {
        self.repository.list().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Report> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Report not found".to_string()))
    }

    /// Resolve a client-supplied id. Ids that are not UUIDs cannot name a report.
    pub async fn get_by_raw_id(&self, raw_id: &str) -> Result<Report> {
        let id = parse_report_id(raw_id)?;
        self.get_by_id(id).await
    }

    /// Create a report from a citizen submission
    ///
    /// Text fields are validated before the image is written, so a rejected
    /// submission leaves nothing behind in the upload directory.
    pub async fn create(&self, submission: ReportSubmission) -> Result<Report> {
        let mut fields = submission.fields;
        fields.location = fields.location.trim().to_string();
        fields.description = fields.description.trim().to_string();
        fields
            .validate()
            .map_err(|e| AppError::Validation(validation_message(&e)))?;

        let severity = match fields.severity.as_deref().map(str::trim) {
            Some(label) if !label.is_empty() => label
                .parse::<ReportSeverity>()
                .map_err(AppError::Validation)?,
            _ => self.severity_source.pick(),
        };

        let coordinates =
            non_blank(fields.coordinates).unwrap_or_else(|| UNKNOWN_COORDINATES.to_string());

        let stored = match submission.image {
            Some(image) => Some(
                self.storage
                    .store_image(&image.data, &image.file_name, &image.content_type)
                    .await?,
            ),
            None => None,
        };

        let report = Report {
            id: Uuid::new_v4(),
            location: fields.location,
            coordinates,
            description: fields.description,
            image_path: stored.as_ref().map(|f| f.url.clone()),
            image_name: stored.as_ref().map(|f| f.original_name.clone()),
            severity,
            status: ReportStatus::default(),
            date: Utc::now(),
        };

        let report = match self.repository.insert(report).await {
            Ok(report) => report,
            Err(e) => {
                // No report will reference the upload
                if let Some(file) = &stored {
                    if let Err(remove_err) = self.storage.remove(&file.file_name).await {
                        tracing::warn!(
                            "Failed to remove orphaned upload {}: {}",
                            file.file_name,
                            remove_err
                        );
                    }
                }
                return Err(e);
            }
        };

        tracing::info!(
            "Created report: {} (severity={}, image={})",
            report.id,
            report.severity,
            report.image_path.is_some()
        );

        Ok(report)
    }

    /// Update only the status of an existing report
    pub async fn update_status(&self, raw_id: &str, status_label: &str) -> Result<Report> {
        let id = parse_report_id(raw_id)?;

        // The id is resolved first so an unknown report reports 404 even with a bad status
        self.get_by_id(id).await?;

        let status = status_label
            .parse::<ReportStatus>()
            .map_err(AppError::Validation)?;

        let report = self
            .repository
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Report not found".to_string()))?;

        tracing::info!("Updated report {} status to {}", report.id, report.status);
        Ok(report)
    }
}

fn parse_report_id(raw_id: &str) -> Result<Uuid> {
    Uuid::parse_str(raw_id.trim()).map_err(|_| AppError::NotFound("Report not found".to_string()))
}
