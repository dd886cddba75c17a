use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::infrastructure::dtos::InfrastructureTypeResponseDto;
use crate::features::infrastructure::services::InfrastructureService;
use crate::shared::types::ApiResponse;

/// List infrastructure types
#[utoipa::path(
    get,
    path = "/api/infrastructure-types",
    responses(
        (status = 200, description = "List of infrastructure types", body = ApiResponse<Vec<InfrastructureTypeResponseDto>>),
    ),
    tag = "infrastructure"
)]
pub async fn list_infrastructure_types(
    State(service): State<Arc<InfrastructureService>>,
) -> Result<Json<ApiResponse<Vec<InfrastructureTypeResponseDto>>>> {
    let types = service.list().await?;
    let dtos: Vec<InfrastructureTypeResponseDto> = types.into_iter().map(|t| t.into()).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}
