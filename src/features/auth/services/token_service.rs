use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::Claims;

/// Issues and validates locally signed HS256 access tokens
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl_secs: u64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.jwt_leeway.as_secs();

        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            token_ttl_secs: config.token_ttl.as_secs(),
        }
    }

    pub fn issue(&self, user_id: Uuid) -> Result<String> {
        let now = chrono::Utc::now().timestamp() as u64;
        let claims = Claims {
            sub: user_id,
            iat: now,
            exp: now + self.token_ttl_secs,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
    }

    pub fn validate(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_service() -> TokenService {
        TokenService::new(&AuthConfig {
            jwt_secret: "test-secret-that-is-long-enough-0123".to_string(),
            token_ttl: Duration::from_secs(3600),
            jwt_leeway: Duration::from_secs(60),
        })
    }

    #[test]
    fn test_issue_validate_round_trip() {
        let service = test_service();
        let user_id = Uuid::new_v4();

        let token = service.issue(user_id).unwrap();
        let claims = service.validate(&token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_validate_rejects_tampered_token() {
        let service = test_service();
        let token = service.issue(Uuid::new_v4()).unwrap();

        let mut tampered = token.clone();
        tampered.pop();
        tampered.push(if token.ends_with('a') { 'b' } else { 'a' });

        assert!(matches!(
            service.validate(&tampered),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_validate_rejects_token_from_other_secret() {
        let service = test_service();
        let other = TokenService::new(&AuthConfig {
            jwt_secret: "another-secret-that-is-long-enough-1".to_string(),
            token_ttl: Duration::from_secs(3600),
            jwt_leeway: Duration::from_secs(60),
        });

        let token = other.issue(Uuid::new_v4()).unwrap();
        assert!(service.validate(&token).is_err());
    }
}
