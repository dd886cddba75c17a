#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
use crate::features::auth::model::AuthenticatedUser;

#[cfg(test)]
#[allow(dead_code)]
pub fn create_moderator_user() -> AuthenticatedUser {
    AuthenticatedUser {
        id: Uuid::new_v4(),
        name: "Test Moderator".to_string(),
        email: "moderator@example.com".to_string(),
        is_admin: false,
        is_moderator: true,
        is_sub_moderator: false,
        infra_type_id: Some(Uuid::new_v4()),
        assigned_moderator_id: None,
    }
}

#[cfg(test)]
#[allow(dead_code)]
pub fn create_sub_moderator_user(assigned_moderator_id: Uuid) -> AuthenticatedUser {
    AuthenticatedUser {
        id: Uuid::new_v4(),
        name: "Test Sub-Moderator".to_string(),
        email: "submod@example.com".to_string(),
        is_admin: false,
        is_moderator: false,
        is_sub_moderator: true,
        infra_type_id: None,
        assigned_moderator_id: Some(assigned_moderator_id),
    }
}

#[cfg(test)]
#[allow(dead_code)]
pub fn create_admin_user() -> AuthenticatedUser {
    AuthenticatedUser {
        id: Uuid::new_v4(),
        name: "Test Admin".to_string(),
        email: "admin@example.com".to_string(),
        is_admin: true,
        is_moderator: false,
        is_sub_moderator: false,
        infra_type_id: None,
        assigned_moderator_id: None,
    }
}
