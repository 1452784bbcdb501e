use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::auth::models::User;
use crate::features::auth::repositories::UserRepository;

const USER_COLUMNS: &str = "id, username, email, password_hash, created_at";

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a unique-index violation on `users` to a 409
fn conflict_for(e: &sqlx::Error) -> Option<AppError> {
    let db_err = e.as_database_error()?;
    if !db_err.is_unique_violation() {
        return None;
    }
    let message = match db_err.constraint() {
        Some("users_username_lower_idx") => "Username already taken",
        _ => "Email already registered",
    };
    Some(AppError::Conflict(message.to_string()))
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn insert(&self, user: User) -> Result<User> {
        let sql = format!(
            r#"
            INSERT INTO users (id, username, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            USER_COLUMNS
        );

        sqlx::query_as::<_, User>(&sql)
            .bind(user.id)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if let Some(conflict) = conflict_for(&e) {
                    return conflict;
                }
                tracing::error!("Failed to insert user: {:?}", e);
                AppError::Database(e)
            })
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let sql = format!(
            "SELECT {} FROM users WHERE lower(email) = lower($1)",
            USER_COLUMNS
        );

        sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch user by email: {:?}", e);
                AppError::Database(e)
            })
    }
}
