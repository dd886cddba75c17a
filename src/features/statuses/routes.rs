use axum::{routing::get, Router};

use crate::features::statuses::handlers;

/// Create routes for the status registry
///
/// Note: This feature is public (no authentication required)
pub fn routes() -> Router {
    Router::new().route("/api/status", get(handlers::list_statuses))
}
