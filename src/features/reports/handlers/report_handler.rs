use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::{RequireModerator, RequireSubModerator};
use crate::features::reports::dtos::{
    CreateReportDto, ReportResponseDto, TransferReportDto, UpdateReportStatusDto,
};
use crate::features::reports::models::CreateReport;
use crate::features::reports::services::ReportService;
use crate::shared::types::{ApiResponse, Meta};

/// Submit a report (public, citizen-facing)
#[utoipa::path(
    post,
    path = "/api/reports/submit",
    request_body = CreateReportDto,
    responses(
        (status = 200, description = "Report submitted", body = ApiResponse<ReportResponseDto>),
        (status = 422, description = "Validation error")
    ),
    tag = "reports"
)]
pub async fn create_report(
    State(service): State<Arc<ReportService>>,
    AppJson(dto): AppJson<CreateReportDto>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let report = service
        .create(&CreateReport {
            description: dto.description,
            reported_by: dto.reported_by,
            contact_number: dto.contact_number,
            infra_type_id: dto.infra_type_id,
        })
        .await?;

    Ok(Json(ApiResponse::success(
        Some(report.into()),
        Some("Report submitted".to_string()),
        None,
    )))
}

/// List all visible reports
#[utoipa::path(
    get,
    path = "/api/reports",
    responses(
        (status = 200, description = "List of reports", body = ApiResponse<Vec<ReportResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn list_reports(
    RequireModerator(_user): RequireModerator,
    State(service): State<Arc<ReportService>>,
) -> Result<Json<ApiResponse<Vec<ReportResponseDto>>>> {
    let reports = service.list().await?;
    let total = reports.len() as i64;
    let dtos: Vec<ReportResponseDto> = reports.into_iter().map(|r| r.into()).collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

/// List reports assigned to the acting moderator
#[utoipa::path(
    get,
    path = "/api/reports/moderator",
    responses(
        (status = 200, description = "Assigned reports", body = ApiResponse<Vec<ReportResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn list_moderator_reports(
    RequireModerator(user): RequireModerator,
    State(service): State<Arc<ReportService>>,
) -> Result<Json<ApiResponse<Vec<ReportResponseDto>>>> {
    let reports = service.list_by_moderator(user.id).await?;
    let total = reports.len() as i64;
    let dtos: Vec<ReportResponseDto> = reports.into_iter().map(|r| r.into()).collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

/// List archived reports
#[utoipa::path(
    get,
    path = "/api/reports/hidden",
    responses(
        (status = 200, description = "Archived reports", body = ApiResponse<Vec<ReportResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn list_hidden_reports(
    RequireModerator(_user): RequireModerator,
    State(service): State<Arc<ReportService>>,
) -> Result<Json<ApiResponse<Vec<ReportResponseDto>>>> {
    let reports = service.list_hidden().await?;
    let dtos: Vec<ReportResponseDto> = reports.into_iter().map(|r| r.into()).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// Apply a status transition to a report
#[utoipa::path(
    put,
    path = "/api/reports/status/{id}",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    request_body = UpdateReportStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<ReportResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Report not found"),
        (status = 409, description = "Concurrent status change"),
        (status = 422, description = "Invalid transition or validation error")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn update_report_status(
    RequireModerator(user): RequireModerator,
    State(service): State<Arc<ReportService>>,
    Path(id): Path<uuid::Uuid>,
    AppJson(dto): AppJson<UpdateReportStatusDto>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = service.update_status(id, &dto, &user).await?;
    Ok(Json(ApiResponse::success(Some(report.into()), None, None)))
}

/// Transfer a report to another moderator
#[utoipa::path(
    put,
    path = "/api/reports/transfer/{id}",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    request_body = TransferReportDto,
    responses(
        (status = 200, description = "Report transferred", body = ApiResponse<ReportResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Report or target not found"),
        (status = 422, description = "Target is not an active moderator")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn transfer_report(
    RequireModerator(_user): RequireModerator,
    State(service): State<Arc<ReportService>>,
    Path(id): Path<uuid::Uuid>,
    AppJson(dto): AppJson<TransferReportDto>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = service.transfer(id, &dto).await?;
    Ok(Json(ApiResponse::success(Some(report.into()), None, None)))
}

/// Mark a report as read
#[utoipa::path(
    put,
    path = "/api/reports/read/{id}",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report marked read", body = ApiResponse<ReportResponseDto>),
        (status = 404, description = "Report not found")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn mark_report_read(
    RequireModerator(_user): RequireModerator,
    State(service): State<Arc<ReportService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = service.mark_read(id, true).await?;
    Ok(Json(ApiResponse::success(Some(report.into()), None, None)))
}

/// Mark a report as unread
#[utoipa::path(
    put,
    path = "/api/reports/unread/{id}",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report marked unread", body = ApiResponse<ReportResponseDto>),
        (status = 404, description = "Report not found")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn mark_report_unread(
    RequireModerator(_user): RequireModerator,
    State(service): State<Arc<ReportService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = service.mark_read(id, false).await?;
    Ok(Json(ApiResponse::success(Some(report.into()), None, None)))
}

/// Archive a report
#[utoipa::path(
    put,
    path = "/api/reports/hide/{id}",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report archived", body = ApiResponse<ReportResponseDto>),
        (status = 404, description = "Report not found")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn hide_report(
    RequireModerator(_user): RequireModerator,
    State(service): State<Arc<ReportService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = service.hide(id).await?;
    Ok(Json(ApiResponse::success(Some(report.into()), None, None)))
}

/// Restore an archived report
#[utoipa::path(
    put,
    path = "/api/reports/restore/{id}",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report restored", body = ApiResponse<ReportResponseDto>),
        (status = 404, description = "Report not found")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn restore_report(
    RequireModerator(_user): RequireModerator,
    State(service): State<Arc<ReportService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = service.restore(id).await?;
    Ok(Json(ApiResponse::success(Some(report.into()), None, None)))
}

/// Delete a report permanently
#[utoipa::path(
    delete,
    path = "/api/reports/delete/{id}",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report deleted"),
        (status = 404, description = "Report not found")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn delete_report(
    RequireModerator(_user): RequireModerator,
    State(service): State<Arc<ReportService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Report deleted successfully".to_string()),
        None,
    )))
}

/// Approve a resolution awaiting confirmation
#[utoipa::path(
    put,
    path = "/api/reports/approve/{id}",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Resolution approved", body = ApiResponse<ReportResponseDto>),
        (status = 403, description = "Not the reviewing sub-moderator"),
        (status = 404, description = "Report not found"),
        (status = 422, description = "Report is not awaiting confirmation")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn approve_resolution(
    RequireSubModerator(user): RequireSubModerator,
    State(service): State<Arc<ReportService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = service.approve_resolution(id, &user).await?;
    Ok(Json(ApiResponse::success(Some(report.into()), None, None)))
}

/// Reject a resolution awaiting confirmation
#[utoipa::path(
    put,
    path = "/api/reports/reject/{id}",
    params(
        ("id" = Uuid, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Resolution rejected", body = ApiResponse<ReportResponseDto>),
        (status = 403, description = "Not the reviewing sub-moderator"),
        (status = 404, description = "Report not found"),
        (status = 422, description = "Report is not awaiting confirmation")
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn reject_resolution(
    RequireSubModerator(user): RequireSubModerator,
    State(service): State<Arc<ReportService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let report = service.reject_resolution(id, &user).await?;
    Ok(Json(ApiResponse::success(Some(report.into()), None, None)))
}
