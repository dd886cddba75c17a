//! Role-based authorization guards.
//!
//! These guards extract the authenticated user and verify the role the
//! endpoint requires. Admins pass the moderator guard so they can act on
//! any report.

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Guard for endpoints that triage reports.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireModerator(user): RequireModerator) { ... }
/// ```
pub struct RequireModerator(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireModerator
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = current_user(parts)?;

        if !user.can_moderate() {
            return Err(AppError::Forbidden(
                "Moderator access required".to_string(),
            ));
        }

        Ok(RequireModerator(user))
    }
}

/// Guard for the resolution confirmation endpoints.
pub struct RequireSubModerator(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireSubModerator
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = current_user(parts)?;

        if !user.is_sub_moderator {
            return Err(AppError::Forbidden(
                "Sub-moderator access required".to_string(),
            ));
        }

        Ok(RequireSubModerator(user))
    }
}

fn current_user(parts: &Parts) -> Result<AuthenticatedUser, AppError> {
    parts
        .extensions
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{
        create_admin_user, create_moderator_user, create_sub_moderator_user,
    };
    use axum::http::Request;

    fn parts_with(user: AuthenticatedUser) -> Parts {
        let mut request = Request::new(());
        request.extensions_mut().insert(user);
        request.into_parts().0
    }

    #[tokio::test]
    async fn test_moderator_guard_accepts_moderator_and_admin() {
        let mut parts = parts_with(create_moderator_user());
        assert!(RequireModerator::from_request_parts(&mut parts, &()).await.is_ok());

        let mut parts = parts_with(create_admin_user());
        assert!(RequireModerator::from_request_parts(&mut parts, &()).await.is_ok());
    }

    #[tokio::test]
    async fn test_moderator_guard_rejects_sub_moderator() {
        let moderator = create_moderator_user();
        let mut parts = parts_with(create_sub_moderator_user(moderator.id));

        let result = RequireModerator::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_sub_moderator_guard_rejects_moderator() {
        let mut parts = parts_with(create_moderator_user());

        let result = RequireSubModerator::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_guards_reject_missing_user() {
        let mut parts = Request::new(()).into_parts().0;

        let result = RequireModerator::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }
}
