use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::reports::models::{Report, ReportSeverity, ReportStatus};

/// Response DTO for report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponseDto {
    pub id: Uuid,
    pub location: String,
    pub coordinates: String,
    pub description: String,
    /// Public URL of the uploaded photo, null when none was attached
    pub image_path: Option<String>,
    /// Filename the photo was uploaded with
    pub image_name: Option<String>,
    pub severity: ReportSeverity,
    pub status: ReportStatus,
    pub date: DateTime<Utc>,
}

impl From<Report> for ReportResponseDto {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            location: r.location,
            coordinates: r.coordinates,
            description: r.description,
            image_path: r.image_path,
            image_name: r.image_name,
            severity: r.severity,
            status: r.status,
            date: r.date,
        }
    }
}

/// Validated text fields of a report submission
#[derive(Debug, Clone, Default, Validate)]
pub struct CreateReportDto {
    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,

    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,

    pub coordinates: Option<String>,

    /// Severity label supplied by the client, if any
    pub severity: Option<String>,
}

/// Image part of a report submission
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub data: Vec<u8>,
    pub file_name: String,
    pub content_type: String,
}

/// A parsed multipart submission (API and citizen form share this)
#[derive(Debug, Clone, Default)]
pub struct ReportSubmission {
    pub fields: CreateReportDto,
    pub image: Option<ImageUpload>,
}

/// Create report request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct CreateReportFormDto {
    #[schema(example = "River X, north bank")]
    pub location: String,
    #[schema(example = "Oily sheen spreading downstream")]
    pub description: String,
    /// Defaults to "Unknown"
    #[schema(example = "Lat: 28.6139, Long: 77.2090")]
    pub coordinates: Option<String>,
    /// Low, Medium or High. Assigned automatically when omitted.
    pub severity: Option<String>,
    /// Photo of the site (jpeg, png, gif or webp)
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub image: Option<String>,
}

/// Request DTO for updating report status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateReportStatusDto {
    /// One of: Pending, Under Review, Resolved, False Alarm
    #[schema(example = "Resolved")]
    pub status: String,
}
