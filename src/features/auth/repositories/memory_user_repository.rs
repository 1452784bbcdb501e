use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::error::{AppError, Result};
use crate::features::auth::models::User;
use crate::features::auth::repositories::UserRepository;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: User) -> Result<User> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.email.eq_ignore_ascii_case(&user.email)) {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }
        if users
            .iter()
            .any(|u| u.username.eq_ignore_ascii_case(&user.username))
        {
            return Err(AppError::Conflict("Username already taken".to_string()));
        }

        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn user(username: &str, email: &str) -> User {
        User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_find_by_email_ignores_case() {
        let repo = InMemoryUserRepository::new();
        let stored = repo.insert(user("river", "River@Example.com")).await.unwrap();

        let found = repo.find_by_email("river@example.com").await.unwrap();

        assert_eq!(found, Some(stored));
        assert_eq!(repo.find_by_email("lake@example.com").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_email_or_username_conflicts() {
        let repo = InMemoryUserRepository::new();
        repo.insert(user("river", "river@example.com")).await.unwrap();

        let same_email = repo.insert(user("lake", "RIVER@example.com")).await;
        let same_name = repo.insert(user("River", "lake@example.com")).await;

        assert!(matches!(same_email, Err(AppError::Conflict(_))));
        assert!(matches!(same_name, Err(AppError::Conflict(_))));
    }
}
