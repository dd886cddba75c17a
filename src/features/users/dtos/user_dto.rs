use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::users::models::User;
use crate::shared::validation::CONTACT_NUMBER_REGEX;

/// Response DTO for user (never carries the password hash)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponseDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub contact_number: Option<String>,
    pub is_admin: bool,
    pub is_moderator: bool,
    pub is_sub_moderator: bool,
    pub deactivated: bool,
    pub infra_type_id: Option<Uuid>,
    pub assigned_moderator_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponseDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            contact_number: u.contact_number,
            is_admin: u.is_admin,
            is_moderator: u.is_moderator,
            is_sub_moderator: u.is_sub_moderator,
            deactivated: u.deactivated,
            infra_type_id: u.infra_type_id,
            assigned_moderator_id: u.assigned_moderator_id,
            created_at: u.created_at,
        }
    }
}

/// Request DTO for updating own profile
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileDto {
    #[validate(length(min = 1, max = 128, message = "Name must be 1-128 characters"))]
    pub name: Option<String>,

    #[validate(regex(
        path = *CONTACT_NUMBER_REGEX,
        message = "Contact number must be a valid PH mobile number"
    ))]
    pub contact_number: Option<String>,
}
