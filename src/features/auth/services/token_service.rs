use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::models::User;

/// Claims carried by issued tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues HS256 bearer tokens
pub struct TokenService {
    encoding_key: EncodingKey,
    expiry_secs: i64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            expiry_secs: config.jwt_expiry_secs,
        }
    }

    pub fn issue(&self, user: &User) -> Result<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            iat: now,
            exp: now + self.expiry_secs,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to sign token: {}", e);
            AppError::Internal(format!("Failed to sign token: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
    use uuid::Uuid;

    #[test]
    fn test_issued_token_carries_user_claims() {
        let config = AuthConfig {
            jwt_secret: "test-secret".to_string(),
            jwt_expiry_secs: 3600,
        };
        let service = TokenService::new(&config);
        let user = User {
            id: Uuid::new_v4(),
            username: "river_saver".to_string(),
            email: "river@example.com".to_string(),
            password_hash: String::new(),
            created_at: Utc::now(),
        };

        let token = service.issue(&user).unwrap();
        let data = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"test-secret"),
            &Validation::new(Algorithm::HS256),
        )
        .unwrap();

        assert_eq!(data.claims.sub, user.id.to_string());
        assert_eq!(data.claims.username, "river_saver");
        assert_eq!(data.claims.exp - data.claims.iat, 3600);
    }
}
