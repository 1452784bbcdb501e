//! View models for the official portal

use chrono::Local;
use serde::Serialize;

use crate::features::dashboard::DashboardStats;
use crate::features::portal::badges::Badge;
use crate::features::reports::models::{Report, ReportStatus};
use crate::shared::constants::{PLACEHOLDER_IMAGE, TABLE_DESCRIPTION_CHARS, TABLE_ID_PREFIX_CHARS};
use crate::shared::templates::{render, TemplateError};

pub const NO_REPORT_ID_MESSAGE: &str = "No Report ID provided";
pub const REPORT_NOT_FOUND_MESSAGE: &str = "Report not found";

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn detail_url(id: &str) -> String {
    format!("/portal/reports/view?id={}", urlencoding::encode(id))
}

fn image_or_placeholder(report: &Report) -> String {
    report
        .image_path
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
}

fn local_date_time(report: &Report) -> String {
    report
        .date
        .with_timezone(&Local)
        .format(DATE_TIME_FORMAT)
        .to_string()
}

/// One row of the reports table
#[derive(Debug, Serialize)]
pub struct ReportRow {
    pub short_id: String,
    pub view_url: String,
    pub image: String,
    pub location: String,
    pub description: String,
    pub date: String,
    pub severity: Badge,
    pub status: Badge,
}

impl From<&Report> for ReportRow {
    fn from(report: &Report) -> Self {
        let id = report.id.to_string();
        // The table always marks both columns as shortened
        let short_id: String = id.chars().take(TABLE_ID_PREFIX_CHARS).collect();
        let description: String = report
            .description
            .chars()
            .take(TABLE_DESCRIPTION_CHARS)
            .collect();

        Self {
            short_id: format!("{}...", short_id),
            view_url: detail_url(&id),
            image: image_or_placeholder(report),
            location: report.location.clone(),
            description: format!("{}...", description),
            date: local_date_time(report),
            severity: Badge::severity(report.severity),
            status: Badge::status(report.status),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportDetail {
    pub id: String,
    pub view_url: String,
    pub image: String,
    pub location: String,
    pub coordinates: String,
    pub date: String,
    pub description: String,
    pub severity: Badge,
    pub status: Badge,
}

impl From<&Report> for ReportDetail {
    fn from(report: &Report) -> Self {
        let id = report.id.to_string();
        let coordinates = match report.coordinates.trim() {
            "" => "N/A".to_string(),
            c => c.to_string(),
        };

        Self {
            view_url: detail_url(&id),
            id,
            image: image_or_placeholder(report),
            location: report.location.clone(),
            coordinates,
            date: local_date_time(report),
            description: report.description.clone(),
            severity: Badge::severity(report.severity),
            status: Badge::status(report.status),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusOption {
    pub value: &'static str,
    pub selected: bool,
}

fn status_options(current: ReportStatus) -> Vec<StatusOption> {
    ReportStatus::ALL
        .into_iter()
        .map(|status| StatusOption {
            value: status.as_str(),
            selected: status == current,
        })
        .collect()
}

pub fn render_dashboard(stats: &DashboardStats) -> Result<String, TemplateError> {
    render(
        "portal/dashboard.html",
        minijinja::context! { active => "dashboard", stats => stats },
    )
}

pub fn render_reports(reports: &[Report]) -> Result<String, TemplateError> {
    let rows: Vec<ReportRow> = reports.iter().map(ReportRow::from).collect();
    render(
        "portal/reports.html",
        minijinja::context! { active => "reports", rows => rows },
    )
}

/// Detail page for a resolved report
pub fn render_report_detail(
    report: &Report,
    updated: bool,
    error: Option<&str>,
) -> Result<String, TemplateError> {
    render(
        "portal/report_detail.html",
        minijinja::context! {
            active => "reports",
            report => ReportDetail::from(report),
            status_options => status_options(report.status),
            updated => updated,
            error => error,
        },
    )
}

/// Detail page showing only a message (missing id, unknown report)
pub fn render_report_message(message: &str) -> Result<String, TemplateError> {
    render(
        "portal/report_detail.html",
        minijinja::context! { active => "reports", message => message },
    )
}
