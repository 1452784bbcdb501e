//! Persistence seam for user accounts

mod memory_user_repository;
mod pg_user_repository;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::auth::models::User;

pub use memory_user_repository::InMemoryUserRepository;
pub use pg_user_repository::PgUserRepository;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new account. Fails with `Conflict` when the email or username is taken.
    async fn insert(&self, user: User) -> Result<User>;

    /// Case-insensitive lookup by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
}
