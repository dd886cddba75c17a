use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::auth::handlers;
use crate::features::auth::services::AuthService;

/// Public routes: registration and login
pub fn public_routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/users", post(handlers::register))
        .route("/api/users/auth", post(handlers::login))
        .with_state(service)
}

/// Protected routes (require auth middleware to be applied by caller)
pub fn protected_routes() -> Router {
    Router::new().route("/api/users/me", get(handlers::get_me))
}
