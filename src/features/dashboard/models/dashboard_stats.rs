use chrono::{DateTime, TimeZone};
use serde::Serialize;

use crate::features::reports::models::{Report, ReportSeverity, ReportStatus};

/// Headline counts shown on the portal dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    /// Reports dated on the current calendar day of `now`'s time zone
    pub today: usize,
    /// High severity reports
    pub hotspots: usize,
    /// Reports still awaiting verification
    pub pending: usize,
}

impl DashboardStats {
    pub fn compute<Tz: TimeZone>(reports: &[Report], now: &DateTime<Tz>) -> Self {
        let tz = now.timezone();
        let today = now.date_naive();

        reports.iter().fold(Self::default(), |mut stats, report| {
            stats.total += 1;
            if report.date.with_timezone(&tz).date_naive() == today {
                stats.today += 1;
            }
            if report.severity == ReportSeverity::High {
                stats.hotspots += 1;
            }
            if report.status == ReportStatus::Pending {
                stats.pending += 1;
            }
            stats
        })
    }
}
