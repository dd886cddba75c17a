use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::users::handlers;
use crate::features::users::services::UserService;

/// Create routes for the users feature
///
/// Protected routes require authentication
pub fn routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route(
            "/api/users/profile",
            get(handlers::get_profile).put(handlers::update_profile),
        )
        .with_state(service)
}
