use axum::{
    extract::{Multipart, State},
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::core::error::AppError;
use crate::features::auth::dtos::{LoginRequestDto, RegisterRequestDto};
use crate::features::auth::services::AuthService;
use crate::features::citizen::session::Session;
use crate::features::citizen::views::{self, FeedView, ReportFormView};
use crate::features::reports::handlers::parse_report_multipart;
use crate::features::reports::ReportService;

const SUBMIT_FAILED: &str = "Failed to submit report. Please try again.";

/// State for citizen page handlers
#[derive(Clone)]
pub struct CitizenState {
    pub report_service: Arc<ReportService>,
    pub auth_service: Arc<AuthService>,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Message shown on a failed form; server faults get the generic fallback
fn form_error(e: &AppError, fallback: &str) -> String {
    if e.status_code().is_server_error() {
        fallback.to_string()
    } else {
        e.public_message()
    }
}

/// Redirect home carrying `Set-Cookie` headers
fn redirect_home_with_cookies(cookies: Vec<header::HeaderValue>) -> Response {
    let mut response = Redirect::to("/").into_response();
    for cookie in cookies {
        response.headers_mut().append(header::SET_COOKIE, cookie);
    }
    response
}

async fn home_page(
    state: &CitizenState,
    session: &Session,
    form: ReportFormView,
) -> Result<String, AppError> {
    let feed = FeedView::from_result(state.report_service.list().await);
    Ok(views::render_home(session, feed, form)?)
}

pub async fn home(
    State(state): State<CitizenState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let html = home_page(&state, &session, ReportFormView::default()).await?;
    Ok(Html(html))
}

pub async fn submit_report(
    State(state): State<CitizenState>,
    session: Session,
    multipart: Multipart,
) -> Result<Response, AppError> {
    if !session.is_authenticated() {
        return Ok(Redirect::to("/login").into_response());
    }

    let submission = match parse_report_multipart(multipart).await {
        Ok(submission) => submission,
        Err(e) => {
            let form = ReportFormView::failed(Default::default(), form_error(&e, SUBMIT_FAILED));
            let html = home_page(&state, &session, form).await?;
            return Ok((e.status_code(), Html(html)).into_response());
        }
    };

    let fields = submission.fields.clone();
    match state.report_service.create(submission).await {
        Ok(_) => {
            let html = home_page(&state, &session, ReportFormView::submitted()).await?;
            Ok(Html(html).into_response())
        }
        Err(e) => {
            let status = e.status_code();
            let form = ReportFormView::failed(fields, form_error(&e, SUBMIT_FAILED));
            let html = home_page(&state, &session, form).await?;
            Ok((status, Html(html)).into_response())
        }
    }
}

pub async fn login_page(session: Session) -> Result<Html<String>, AppError> {
    Ok(Html(views::render_login(&session, None, "")?))
}

pub async fn login(
    State(state): State<CitizenState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let email = form.email.clone();
    let dto = LoginRequestDto {
        email: form.email,
        password: form.password,
    };

    match state.auth_service.login(dto).await {
        Ok(auth) => Ok(redirect_home_with_cookies(
            Session::from_auth(&auth).set_cookie_headers(),
        )),
        Err(e) => {
            let message = form_error(&e, "Login failed");
            let html = views::render_login(&session, Some(&message), &email)?;
            Ok((e.status_code(), Html(html)).into_response())
        }
    }
}

pub async fn signup_page(session: Session) -> Result<Html<String>, AppError> {
    Ok(Html(views::render_signup(&session, None, "", "")?))
}

pub async fn signup(
    State(state): State<CitizenState>,
    session: Session,
    Form(form): Form<SignupForm>,
) -> Result<Response, AppError> {
    let (username, email) = (form.username.clone(), form.email.clone());
    let dto = RegisterRequestDto {
        username: form.username,
        email: form.email,
        password: form.password,
    };

    match state.auth_service.register(dto).await {
        Ok(auth) => Ok(redirect_home_with_cookies(
            Session::from_auth(&auth).set_cookie_headers(),
        )),
        Err(e) => {
            let message = form_error(&e, "Signup failed");
            let html = views::render_signup(&session, Some(&message), &username, &email)?;
            Ok((e.status_code(), Html(html)).into_response())
        }
    }
}

pub async fn logout() -> Response {
    redirect_home_with_cookies(Session::clear_cookie_headers())
}
