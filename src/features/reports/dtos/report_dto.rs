use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::reports::models::{Report, ReportStatus};
use crate::shared::validation::CONTACT_NUMBER_REGEX;

/// Response DTO for report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportResponseDto {
    pub id: Uuid,
    pub description: String,
    pub reported_by: String,
    pub contact_number: String,
    pub infra_type_id: Uuid,
    pub status: ReportStatus,
    pub status_label: String,
    pub status_remark: Option<String>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub moderator_id: Option<Uuid>,
    pub is_requested: bool,
    pub is_read: bool,
    pub is_hidden: bool,
    pub hidden_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Report> for ReportResponseDto {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            description: r.description,
            reported_by: r.reported_by,
            contact_number: r.contact_number,
            infra_type_id: r.infra_type_id,
            status: r.status,
            status_label: r.status.display_name().to_string(),
            status_remark: r.status_remark,
            resolved_at: r.resolved_at,
            moderator_id: r.moderator_id,
            is_requested: r.is_requested,
            is_read: r.is_read,
            is_hidden: r.is_hidden,
            hidden_at: r.hidden_at,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Request DTO for a citizen submission
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateReportDto {
    #[validate(length(min = 1, max = 1000, message = "Description must be 1-1000 characters"))]
    pub description: String,

    #[validate(length(min = 1, max = 128, message = "Name must be 1-128 characters"))]
    pub reported_by: String,

    #[validate(regex(
        path = *CONTACT_NUMBER_REGEX,
        message = "Contact number must be a valid PH mobile number"
    ))]
    pub contact_number: String,

    pub infra_type_id: Uuid,
}

/// Request DTO for applying a status transition
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateReportStatusDto {
    pub status: ReportStatus,
    pub remark: String,
    /// Required when the target status is Resolved
    pub resolved_at: Option<DateTime<Utc>>,
    /// Park the resolution in Under Review until a sub-moderator confirms it.
    /// Only meaningful when the target status is Resolved.
    #[serde(default)]
    pub request_confirmation: bool,
}

/// Request DTO for transferring a report to another moderator
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TransferReportDto {
    pub moderator_id: Uuid,
}
