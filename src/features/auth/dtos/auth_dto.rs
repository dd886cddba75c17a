use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::users::dtos::UserResponseDto;
use crate::shared::validation::CONTACT_NUMBER_REGEX;

/// Request DTO for registering a moderator account
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequestDto {
    #[validate(length(min = 1, max = 128, message = "Name must be 1-128 characters"))]
    pub name: String,

    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,

    #[validate(regex(
        path = *CONTACT_NUMBER_REGEX,
        message = "Contact number must be a valid PH mobile number"
    ))]
    pub contact_number: Option<String>,

    /// Infrastructure type the moderator will triage reports for
    pub infra_type_id: Uuid,
}

/// Request DTO for credential login
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequestDto {
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response DTO for successful login
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthResponseDto {
    pub token: String,
    pub user: UserResponseDto,
}
