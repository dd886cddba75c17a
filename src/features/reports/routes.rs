use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::features::reports::handlers;
use crate::features::reports::services::ReportService;

/// Public routes: citizen submission
pub fn public_routes(service: Arc<ReportService>) -> Router {
    Router::new()
        .route("/api/reports/submit", post(handlers::create_report))
        .with_state(service)
}

/// Protected routes (require auth middleware to be applied by caller)
pub fn protected_routes(service: Arc<ReportService>) -> Router {
    Router::new()
        .route("/api/reports", get(handlers::list_reports))
        .route(
            "/api/reports/moderator",
            get(handlers::list_moderator_reports),
        )
        .route("/api/reports/hidden", get(handlers::list_hidden_reports))
        .route(
            "/api/reports/status/{id}",
            put(handlers::update_report_status),
        )
        .route(
            "/api/reports/transfer/{id}",
            put(handlers::transfer_report),
        )
        .route("/api/reports/read/{id}", put(handlers::mark_report_read))
        .route(
            "/api/reports/unread/{id}",
            put(handlers::mark_report_unread),
        )
        .route("/api/reports/hide/{id}", put(handlers::hide_report))
        .route("/api/reports/restore/{id}", put(handlers::restore_report))
        .route("/api/reports/delete/{id}", delete(handlers::delete_report))
        .route(
            "/api/reports/approve/{id}",
            put(handlers::approve_resolution),
        )
        .route("/api/reports/reject/{id}", put(handlers::reject_resolution))
        .with_state(service)
}
