mod report;

pub use report::{Report, ReportSeverity, ReportStatus};
