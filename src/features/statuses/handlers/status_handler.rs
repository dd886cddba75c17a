use axum::{extract::Query, Json};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::core::error::Result;
use crate::features::reports::models::ReportStatus;
use crate::features::reports::policy;
use crate::features::statuses::dtos::StatusResponseDto;
use crate::shared::types::ApiResponse;

/// Query params for listing statuses
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListStatusesQuery {
    /// When set, return only the options to display for a report in this
    /// status: the status itself first, then its allowed targets
    pub current: Option<ReportStatus>,
}

/// List the status registry
///
/// Without `current`, returns the full catalog with the transition graph.
/// With `current`, returns the display-option set for that status.
#[utoipa::path(
    get,
    path = "/api/status",
    params(ListStatusesQuery),
    responses(
        (status = 200, description = "Status registry", body = ApiResponse<Vec<StatusResponseDto>>),
    ),
    tag = "statuses"
)]
pub async fn list_statuses(
    Query(query): Query<ListStatusesQuery>,
) -> Result<Json<ApiResponse<Vec<StatusResponseDto>>>> {
    let statuses: Vec<StatusResponseDto> = match query.current {
        Some(current) => policy::display_options(current)
            .into_iter()
            .map(|s| s.into())
            .collect(),
        None => ReportStatus::ALL.iter().map(|s| (*s).into()).collect(),
    };

    Ok(Json(ApiResponse::success(Some(statuses), None, None)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::statuses::routes;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_list_statuses_returns_full_catalog() {
        let server = TestServer::new(routes::routes()).unwrap();

        let response = server.get("/api/status").await;
        response.assert_status_ok();

        let body: ApiResponse<Vec<StatusResponseDto>> = response.json();
        let statuses = body.data.unwrap();
        assert_eq!(statuses.len(), ReportStatus::ALL.len());

        let resolved = statuses
            .iter()
            .find(|s| s.name == ReportStatus::Resolved)
            .unwrap();
        assert_eq!(resolved.label, "Resolved");
        assert!(resolved.terminal);
        assert!(resolved.allowed_next.is_empty());
    }

    #[tokio::test]
    async fn test_list_statuses_with_current_returns_display_options() {
        let server = TestServer::new(routes::routes()).unwrap();

        let response = server.get("/api/status").add_query_param("current", "pending").await;
        response.assert_status_ok();

        let body: ApiResponse<Vec<StatusResponseDto>> = response.json();
        let options = body.data.unwrap();

        // Current status first, then In Progress, Dismissed, Unassigned
        assert_eq!(options[0].name, ReportStatus::Pending);
        assert_eq!(options.len(), 4);
    }
}
