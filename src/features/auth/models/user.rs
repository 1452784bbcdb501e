use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a registered citizen
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// PHC-formatted argon2 hash
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
