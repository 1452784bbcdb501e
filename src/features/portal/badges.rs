use serde::Serialize;

use crate::features::reports::models::{ReportSeverity, ReportStatus};

/// Colored label for a severity or status value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub background: &'static str,
    pub foreground: &'static str,
    pub label: &'static str,
}

impl Badge {
    /// Severity badges use white text on the severity color
    pub fn severity(severity: ReportSeverity) -> Self {
        let background = match severity {
            ReportSeverity::High => "var(--danger-color)",
            ReportSeverity::Medium => "var(--warning-color)",
            ReportSeverity::Low => "var(--success-color)",
        };
        Self {
            background,
            foreground: "white",
            label: severity.as_str(),
        }
    }

    pub fn status(status: ReportStatus) -> Self {
        let (background, foreground) = match status {
            ReportStatus::Pending => ("#ffeeba", "#856404"),
            ReportStatus::UnderReview => ("#b8daff", "#004085"),
            ReportStatus::Resolved => ("#c3e6cb", "#155724"),
            ReportStatus::FalseAlarm => ("#f8d7da", "#721c24"),
        };
        Self {
            background,
            foreground,
            label: status.as_str(),
        }
    }
}
