use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// Report status enum matching database enum
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Type, ToSchema,
)]
#[sqlx(type_name = "report_status")]
pub enum ReportStatus {
    #[default]
    Pending,
    #[serde(rename = "Under Review")]
    #[sqlx(rename = "Under Review")]
    UnderReview,
    Resolved,
    #[serde(rename = "False Alarm")]
    #[sqlx(rename = "False Alarm")]
    FalseAlarm,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 4] = [
        ReportStatus::Pending,
        ReportStatus::UnderReview,
        ReportStatus::Resolved,
        ReportStatus::FalseAlarm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "Pending",
            ReportStatus::UnderReview => "Under Review",
            ReportStatus::Resolved => "Resolved",
            ReportStatus::FalseAlarm => "False Alarm",
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ReportStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid status '{}'. Allowed values: Pending, Under Review, Resolved, False Alarm",
                    s
                )
            })
    }
}

/// Report severity enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "report_severity")]
pub enum ReportSeverity {
    Low,
    Medium,
    High,
}

impl ReportSeverity {
    pub const ALL: [ReportSeverity; 3] = [
        ReportSeverity::Low,
        ReportSeverity::Medium,
        ReportSeverity::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportSeverity::Low => "Low",
            ReportSeverity::Medium => "Medium",
            ReportSeverity::High => "High",
        }
    }
}

impl std::fmt::Display for ReportSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportSeverity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ReportSeverity::ALL
            .into_iter()
            .find(|severity| severity.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid severity '{}'. Allowed values: Low, Medium, High",
                    s
                )
            })
    }
}

/// Database model for report
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Report {
    pub id: Uuid,
    pub location: String,
    pub coordinates: String,
    pub description: String,
    pub image_path: Option<String>,
    pub image_name: Option<String>,
    pub severity: ReportSeverity,
    pub status: ReportStatus,
    pub date: DateTime<Utc>,
}
