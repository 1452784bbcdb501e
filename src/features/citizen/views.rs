//! View models for the citizen pages

use chrono::Local;
use serde::Serialize;

use crate::core::error::AppError;
use crate::features::citizen::leaderboard::{leaderboard, LeaderboardEntry};
use crate::features::citizen::session::Session;
use crate::features::reports::dtos::CreateReportDto;
use crate::features::reports::models::Report;
use crate::modules::storage::ALLOWED_IMAGE_TYPES;
use crate::shared::constants::{FEED_DESCRIPTION_CHARS, PLACEHOLDER_IMAGE};
use crate::shared::templates::{render, TemplateError};
use crate::shared::validation::truncate_chars;

pub const FEED_EMPTY_MESSAGE: &str = "No reports yet. Be the first to submit one!";
pub const FEED_ERROR_MESSAGE: &str = "Failed to load reports. Please try again later.";

/// What the navigation bar needs from the session
#[derive(Debug, Serialize)]
pub struct NavView {
    pub logged_in: bool,
    pub username: Option<String>,
}

impl From<&Session> for NavView {
    fn from(session: &Session) -> Self {
        Self {
            logged_in: session.is_authenticated(),
            username: session.username().map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FeedCard {
    pub image: String,
    pub location: String,
    pub description: String,
    pub date: String,
    pub status: &'static str,
}

impl From<&Report> for FeedCard {
    fn from(report: &Report) -> Self {
        Self {
            image: report
                .image_path
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            location: report.location.clone(),
            description: truncate_chars(&report.description, FEED_DESCRIPTION_CHARS),
            date: report
                .date
                .with_timezone(&Local)
                .format("%Y-%m-%d")
                .to_string(),
            status: report.status.as_str(),
        }
    }
}

/// Report feed, or the reason it could not be shown
#[derive(Debug, Default, Serialize)]
pub struct FeedView {
    pub cards: Vec<FeedCard>,
    pub error: Option<&'static str>,
}

impl FeedView {
    pub fn from_result(result: Result<Vec<Report>, AppError>) -> Self {
        match result {
            Ok(reports) => Self {
                cards: reports.iter().map(FeedCard::from).collect(),
                error: None,
            },
            Err(e) => {
                tracing::error!("Failed to load reports for feed: {}", e);
                Self {
                    cards: Vec::new(),
                    error: Some(FEED_ERROR_MESSAGE),
                }
            }
        }
    }
}

/// State of the submission form
#[derive(Debug, Serialize)]
pub struct ReportFormView {
    pub submitted: bool,
    pub error: Option<String>,
    pub location: String,
    pub coordinates: String,
    pub description: String,
    pub accept: String,
}

impl Default for ReportFormView {
    fn default() -> Self {
        Self {
            submitted: false,
            error: None,
            location: String::new(),
            coordinates: String::new(),
            description: String::new(),
            accept: ALLOWED_IMAGE_TYPES.join(","),
        }
    }
}

impl ReportFormView {
    pub fn submitted() -> Self {
        Self {
            submitted: true,
            ..Self::default()
        }
    }

    /// Form shown again with the citizen's input and the failure message
    pub fn failed(fields: CreateReportDto, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            location: fields.location,
            coordinates: fields.coordinates.unwrap_or_default(),
            description: fields.description,
            ..Self::default()
        }
    }
}

#[derive(Serialize)]
struct HomeContext {
    session: NavView,
    feed: FeedView,
    leaderboard: Vec<LeaderboardEntry>,
    form: ReportFormView,
}

pub fn render_home(
    session: &Session,
    feed: FeedView,
    form: ReportFormView,
) -> Result<String, TemplateError> {
    render(
        "citizen/home.html",
        HomeContext {
            session: session.into(),
            feed,
            leaderboard: leaderboard(),
            form,
        },
    )
}

#[derive(Serialize)]
struct LoginContext<'a> {
    session: NavView,
    error: Option<&'a str>,
    email: &'a str,
}

pub fn render_login(
    session: &Session,
    error: Option<&str>,
    email: &str,
) -> Result<String, TemplateError> {
    render(
        "citizen/login.html",
        LoginContext {
            session: session.into(),
            error,
            email,
        },
    )
}

#[derive(Serialize)]
struct SignupContext<'a> {
    session: NavView,
    error: Option<&'a str>,
    username: &'a str,
    email: &'a str,
}

pub fn render_signup(
    session: &Session,
    error: Option<&str>,
    username: &str,
    email: &str,
) -> Result<String, TemplateError> {
    render(
        "citizen/signup.html",
        SignupContext {
            session: session.into(),
            error,
            username,
            email,
        },
    )
}
