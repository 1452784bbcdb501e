use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{AuthResponseDto, LoginRequestDto, RegisterRequestDto};
use crate::features::auth::models::User;
use crate::features::auth::repositories::UserRepository;
use crate::features::auth::services::password::{hash_password, verify_password};
use crate::features::auth::services::token_service::TokenService;
use crate::shared::validation::validation_message;

/// Service for authentication operations (register, login)
pub struct AuthService {
    repository: Arc<dyn UserRepository>,
    token_service: Arc<TokenService>,
}

impl AuthService {
    pub fn new(repository: Arc<dyn UserRepository>, token_service: Arc<TokenService>) -> Self {
        Self {
            repository,
            token_service,
        }
    }

    /// Register a new user
    pub async fn register(&self, mut dto: RegisterRequestDto) -> Result<AuthResponseDto> {
        dto.username = dto.username.trim().to_string();
        dto.email = dto.email.trim().to_lowercase();
        dto.validate()
            .map_err(|e| AppError::Validation(validation_message(&e)))?;

        if self.repository.find_by_email(&dto.email).await?.is_some() {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        // Argon2 runs on the blocking pool
        let password = dto.password;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))??;

        let user = self
            .repository
            .insert(User {
                id: Uuid::new_v4(),
                username: dto.username,
                email: dto.email,
                password_hash,
                created_at: Utc::now(),
            })
            .await?;

        tracing::info!("Registered user {} ({})", user.username, user.id);

        self.respond(user)
    }

    /// Login with email and password
    pub async fn login(&self, mut dto: LoginRequestDto) -> Result<AuthResponseDto> {
        dto.email = dto.email.trim().to_lowercase();
        dto.validate()
            .map_err(|e| AppError::Validation(validation_message(&e)))?;

        let invalid = || AppError::Unauthorized("Invalid credentials".to_string());

        let user = self
            .repository
            .find_by_email(&dto.email)
            .await?
            .ok_or_else(invalid)?;

        let password = dto.password;
        let hash = user.password_hash.clone();
        let password_valid = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| AppError::Internal(format!("Password check task failed: {}", e)))?;

        if !password_valid {
            tracing::debug!("Rejected login for {}", user.id);
            return Err(invalid());
        }

        tracing::info!("User {} logged in", user.id);

        self.respond(user)
    }

    fn respond(&self, user: User) -> Result<AuthResponseDto> {
        let token = self.token_service.issue(&user)?;
        Ok(AuthResponseDto {
            token,
            user: user.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AuthConfig;
    use crate::features::auth::repositories::InMemoryUserRepository;
    use fake::faker::internet::en::SafeEmail;
    use fake::Fake;

    fn service() -> AuthService {
        let config = AuthConfig {
            jwt_secret: "test-secret".to_string(),
            jwt_expiry_secs: 3600,
        };
        AuthService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(TokenService::new(&config)),
        )
    }

    fn register_dto(username: &str, email: &str) -> RegisterRequestDto {
        RegisterRequestDto {
            username: username.to_string(),
            email: email.to_string(),
            password: "hunter22".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let service = service();
        let email: String = SafeEmail().fake();

        let registered = service
            .register(register_dto("river_saver", &email))
            .await
            .unwrap();
        let logged_in = service
            .login(LoginRequestDto {
                email: email.clone(),
                password: "hunter22".to_string(),
            })
            .await
            .unwrap();

        assert!(!registered.token.is_empty());
        assert_eq!(registered.user.username, "river_saver");
        assert_eq!(registered.user.email, email.to_lowercase());
        assert_eq!(logged_in.user, registered.user);
    }

    #[tokio::test]
    async fn test_login_with_wrong_password_or_unknown_email() {
        let service = service();
        service
            .register(register_dto("river_saver", "river@example.com"))
            .await
            .unwrap();

        let wrong_password = service
            .login(LoginRequestDto {
                email: "river@example.com".to_string(),
                password: "nope-nope".to_string(),
            })
            .await;
        let unknown = service
            .login(LoginRequestDto {
                email: "lake@example.com".to_string(),
                password: "hunter22".to_string(),
            })
            .await;

        for result in [wrong_password, unknown] {
            match result {
                Err(AppError::Unauthorized(msg)) => assert_eq!(msg, "Invalid credentials"),
                other => panic!("expected unauthorized, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let service = service();
        service
            .register(register_dto("river_saver", "river@example.com"))
            .await
            .unwrap();

        let result = service
            .register(register_dto("lake_keeper", "river@example.com"))
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_register_validation() {
        let service = service();

        let bad_name = service.register(register_dto("a b", "x@example.com")).await;
        let bad_email = service.register(register_dto("river", "not-an-email")).await;
        let short_password = service
            .register(RegisterRequestDto {
                password: "12345".to_string(),
                ..register_dto("river", "x@example.com")
            })
            .await;

        for result in [bad_name, bad_email, short_password] {
            assert!(matches!(result, Err(AppError::Validation(_))));
        }
    }
}
