use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::notifications::dtos::NotificationResponseDto;
use crate::features::notifications::services::NotificationService;
use crate::shared::types::ApiResponse;

/// List own notifications, newest first
#[utoipa::path(
    get,
    path = "/api/notifications",
    responses(
        (status = 200, description = "Notifications for the acting user", body = ApiResponse<Vec<NotificationResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "notifications"
)]
pub async fn list_notifications(
    user: AuthenticatedUser,
    State(service): State<Arc<NotificationService>>,
) -> Result<Json<ApiResponse<Vec<NotificationResponseDto>>>> {
    let notifications = service.list_for_user(&user).await?;
    let dtos: Vec<NotificationResponseDto> =
        notifications.into_iter().map(|n| n.into()).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// Mark a notification as read
#[utoipa::path(
    put,
    path = "/api/notifications/read/{id}",
    params(
        ("id" = Uuid, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification marked read", body = ApiResponse<NotificationResponseDto>),
        (status = 404, description = "Notification not found")
    ),
    security(("bearer_auth" = [])),
    tag = "notifications"
)]
pub async fn mark_notification_read(
    user: AuthenticatedUser,
    State(service): State<Arc<NotificationService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<NotificationResponseDto>>> {
    let notification = service.mark_read(id, user.id, true).await?;
    Ok(Json(ApiResponse::success(
        Some(notification.into()),
        None,
        None,
    )))
}

/// Mark a notification as unread
#[utoipa::path(
    put,
    path = "/api/notifications/unread/{id}",
    params(
        ("id" = Uuid, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification marked unread", body = ApiResponse<NotificationResponseDto>),
        (status = 404, description = "Notification not found")
    ),
    security(("bearer_auth" = [])),
    tag = "notifications"
)]
pub async fn mark_notification_unread(
    user: AuthenticatedUser,
    State(service): State<Arc<NotificationService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<NotificationResponseDto>>> {
    let notification = service.mark_read(id, user.id, false).await?;
    Ok(Json(ApiResponse::success(
        Some(notification.into()),
        None,
        None,
    )))
}

/// Delete a notification
#[utoipa::path(
    delete,
    path = "/api/notifications/{id}",
    params(
        ("id" = Uuid, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification deleted"),
        (status = 404, description = "Notification not found")
    ),
    security(("bearer_auth" = [])),
    tag = "notifications"
)]
pub async fn delete_notification(
    user: AuthenticatedUser,
    State(service): State<Arc<NotificationService>>,
    Path(id): Path<uuid::Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id, user.id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Notification deleted successfully".to_string()),
        None,
    )))
}
