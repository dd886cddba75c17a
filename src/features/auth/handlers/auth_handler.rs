use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::dtos::{AuthResponseDto, LoginRequestDto, RegisterRequestDto};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::services::AuthService;
use crate::features::users::dtos::UserResponseDto;
use crate::shared::types::ApiResponse;

/// Register a moderator account
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterRequestDto,
    responses(
        (status = 200, description = "Account created", body = ApiResponse<UserResponseDto>),
        (status = 409, description = "Email already registered"),
        (status = 422, description = "Validation error")
    ),
    tag = "auth"
)]
pub async fn register(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<RegisterRequestDto>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = service.register(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(user.into()),
        Some("Account created".to_string()),
        None,
    )))
}

/// Authenticate with email and password
#[utoipa::path(
    post,
    path = "/api/users/auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Authenticated", body = ApiResponse<AuthResponseDto>),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "Account deactivated")
    ),
    tag = "auth"
)]
pub async fn login(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<LoginRequestDto>,
) -> Result<Json<ApiResponse<AuthResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let (token, user) = service.login(dto).await?;
    let response = AuthResponseDto {
        token,
        user: user.into(),
    };

    Ok(Json(ApiResponse::success(Some(response), None, None)))
}

/// Get the acting user
#[utoipa::path(
    get,
    path = "/api/users/me",
    responses(
        (status = 200, description = "Acting user", body = ApiResponse<AuthenticatedUser>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
pub async fn get_me(user: AuthenticatedUser) -> Json<ApiResponse<AuthenticatedUser>> {
    Json(ApiResponse::success(Some(user), None, None))
}
