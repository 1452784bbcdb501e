use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::dashboard::models::DashboardStats;

/// Dashboard summary counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardSummaryDto {
    /// All reports
    pub total: usize,
    /// Reports submitted today (server local time)
    pub today: usize,
    /// High severity reports ("Major Hotspots")
    pub hotspots: usize,
    /// Reports with status Pending ("Pending Verifications")
    pub pending: usize,
}

impl From<DashboardStats> for DashboardSummaryDto {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total: stats.total,
            today: stats.today,
            hotspots: stats.hotspots,
            pending: stats.pending,
        }
    }
}
