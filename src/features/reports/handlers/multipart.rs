use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use axum::http::StatusCode;
use tracing::debug;

use crate::core::error::AppError;
use crate::features::reports::dtos::{ImageUpload, ReportSubmission};

/// Read a report submission from multipart/form-data
///
/// Recognised fields: `location`, `description`, `coordinates`, `severity`
/// and `image`. An image part with no bytes (a form submitted without
/// choosing a file) counts as no image.
pub async fn parse_report_multipart(mut multipart: Multipart) -> Result<ReportSubmission, AppError> {
    let mut submission = ReportSubmission::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, "multipart data"))?
    {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "image" => {
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let file_name = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unnamed".to_string());

                let data = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error(e, "image data"))?;

                if data.is_empty() {
                    continue;
                }

                submission.image = Some(ImageUpload {
                    data: data.to_vec(),
                    file_name,
                    content_type,
                });
            }
            "location" | "description" | "coordinates" | "severity" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| multipart_error(e, &format!("{} field", field_name)))?;
                let fields = &mut submission.fields;
                match field_name.as_str() {
                    "location" => fields.location = text,
                    "description" => fields.description = text,
                    "coordinates" => fields.coordinates = Some(text),
                    _ => fields.severity = Some(text),
                }
            }
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    Ok(submission)
}

/// Body limit rejections keep their 413; anything else is a malformed request
fn multipart_error(e: MultipartError, what: &str) -> AppError {
    debug!("Failed to read {}: {}", what, e);
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Request body too large".to_string())
    } else {
        AppError::BadRequest(format!("Failed to read {}: {}", what, e))
    }
}
