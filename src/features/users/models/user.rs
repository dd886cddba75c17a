use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::auth::model::AuthenticatedUser;

/// Database model for user
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub contact_number: Option<String>,
    pub is_admin: bool,
    pub is_moderator: bool,
    pub is_sub_moderator: bool,
    pub deactivated: bool,
    /// Infrastructure type a moderator triages reports for
    pub infra_type_id: Option<Uuid>,
    /// Moderator a sub-moderator reviews resolutions for
    pub assigned_moderator_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn into_authenticated(self) -> AuthenticatedUser {
        AuthenticatedUser {
            id: self.id,
            name: self.name,
            email: self.email,
            is_admin: self.is_admin,
            is_moderator: self.is_moderator,
            is_sub_moderator: self.is_sub_moderator,
            infra_type_id: self.infra_type_id,
            assigned_moderator_id: self.assigned_moderator_id,
        }
    }
}

/// Data for creating a new user
#[derive(Debug)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub contact_number: Option<String>,
    pub is_moderator: bool,
    pub is_sub_moderator: bool,
    pub infra_type_id: Option<Uuid>,
    pub assigned_moderator_id: Option<Uuid>,
}
