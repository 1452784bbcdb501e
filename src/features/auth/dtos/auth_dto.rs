use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::auth::models::User;
use crate::shared::validation::USERNAME_REGEX;

/// Request DTO for user registration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterRequestDto {
    #[validate(regex(
        path = *USERNAME_REGEX,
        message = "Username must be 3-30 characters of letters, digits or underscores"
    ))]
    #[schema(example = "river_saver")]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "citizen@example.com")]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Request DTO for user login
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequestDto {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "citizen@example.com")]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response DTO for authentication (register/login)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponseDto {
    /// HS256 bearer token
    pub token: String,
    pub user: AuthUserDto,
}

/// User profile returned with a token and kept in the `user` cookie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuthUserDto {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

impl From<User> for AuthUserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}
