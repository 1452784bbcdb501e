use rand::Rng;

use crate::features::reports::models::ReportSeverity;

/// Picks the severity of a report submitted without one
pub trait SeveritySource: Send + Sync {
    fn pick(&self) -> ReportSeverity;
}

/// Uniform choice among Low, Medium and High
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSeverity;

impl SeveritySource for RandomSeverity {
    fn pick(&self) -> ReportSeverity {
        let idx = rand::thread_rng().gen_range(0..ReportSeverity::ALL.len());
        ReportSeverity::ALL[idx]
    }
}

/// Always returns the same severity
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedSeverity(pub ReportSeverity);

#[cfg(test)]
impl SeveritySource for FixedSeverity {
    fn pick(&self) -> ReportSeverity {
        self.0
    }
}
