mod report_service;
mod severity;

pub use report_service::ReportService;
#[cfg(test)]
pub use severity::FixedSeverity;
pub use severity::{RandomSeverity, SeveritySource};
