use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{LoginRequestDto, RegisterRequestDto};
use crate::features::auth::services::TokenService;
use crate::features::users::models::{CreateUser, User};
use crate::features::users::services::UserService;

/// Service for registration and credential-based login
pub struct AuthService {
    users: Arc<UserService>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(users: Arc<UserService>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }

    /// Register a moderator account for an infrastructure type
    pub async fn register(&self, dto: RegisterRequestDto) -> Result<User> {
        let password_hash = hash_password(&dto.password)?;

        let user = self
            .users
            .create(&CreateUser {
                name: dto.name,
                email: dto.email.to_lowercase(),
                password_hash,
                contact_number: dto.contact_number,
                is_moderator: true,
                is_sub_moderator: false,
                infra_type_id: Some(dto.infra_type_id),
                assigned_moderator_id: None,
            })
            .await?;

        tracing::info!("Registered moderator account: {}", user.id);
        Ok(user)
    }

    /// Verify credentials and issue an access token
    pub async fn login(&self, dto: LoginRequestDto) -> Result<(String, User)> {
        let user = self
            .users
            .find_by_email(&dto.email.to_lowercase())
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

        if !verify_password(&dto.password, &user.password_hash)? {
            return Err(AppError::Unauthorized(
                "Invalid email or password".to_string(),
            ));
        }

        if user.deactivated {
            return Err(AppError::Forbidden("Account is deactivated".to_string()));
        }

        let token = self.tokens.issue(user.id)?;
        Ok((token, user))
    }
}

fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(format!("Invalid password hash: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_round_trip() {
        let hash = hash_password("correct horse battery staple").unwrap();

        assert!(verify_password("correct horse battery staple", &hash).unwrap());
        assert!(!verify_password("wrong password", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(matches!(
            verify_password("anything", "not-a-phc-string"),
            Err(AppError::Internal(_))
        ));
    }
}
