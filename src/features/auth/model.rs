use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// The acting user as seen by handlers, loaded fresh from the database by
/// the auth middleware on every request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub is_moderator: bool,
    pub is_sub_moderator: bool,
    pub infra_type_id: Option<Uuid>,
    pub assigned_moderator_id: Option<Uuid>,
}

impl AuthenticatedUser {
    /// Check if user can act on reports as a moderator
    pub fn can_moderate(&self) -> bool {
        self.is_moderator || self.is_admin
    }
}

/// JWT claims for locally issued access tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub iat: u64,
    pub exp: u64,
}
