use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::dtos::{AuthResponseDto, LoginRequestDto, RegisterRequestDto};
use crate::features::auth::services::AuthService;
use crate::shared::types::ErrorResponse;
use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequestDto,
    responses(
        (status = 201, description = "User registered successfully", body = AuthResponseDto),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "Email or username already registered", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn register(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<RegisterRequestDto>,
) -> Result<(StatusCode, Json<AuthResponseDto>)> {
    let auth_response = service.register(dto).await?;
    Ok((StatusCode::CREATED, Json(auth_response)))
}

/// Login with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = AuthResponseDto),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<LoginRequestDto>,
) -> Result<Json<AuthResponseDto>> {
    let auth_response = service.login(dto).await?;
    Ok(Json(auth_response))
}
