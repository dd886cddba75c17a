use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::infrastructure::handlers;
use crate::features::infrastructure::services::InfrastructureService;

/// Create routes for the infrastructure feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<InfrastructureService>) -> Router {
    Router::new()
        .route(
            "/api/infrastructure-types",
            get(handlers::list_infrastructure_types),
        )
        .with_state(service)
}
