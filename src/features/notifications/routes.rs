use std::sync::Arc;

use axum::{
    routing::{delete, get, put},
    Router,
};

use crate::features::notifications::handlers;
use crate::features::notifications::services::NotificationService;

/// Create routes for the notifications feature
///
/// All routes require authentication
pub fn routes(service: Arc<NotificationService>) -> Router {
    Router::new()
        .route("/api/notifications", get(handlers::list_notifications))
        .route(
            "/api/notifications/read/{id}",
            put(handlers::mark_notification_read),
        )
        .route(
            "/api/notifications/unread/{id}",
            put(handlers::mark_notification_unread),
        )
        .route(
            "/api/notifications/{id}",
            delete(handlers::delete_notification),
        )
        .with_state(service)
}
