use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Report status enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "report_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Unassigned,
    Pending,
    InProgress,
    Resolved,
    Dismissed,
    UnderReview,
    ForRevision,
}

impl ReportStatus {
    /// Every status, in registry order
    pub const ALL: [ReportStatus; 7] = [
        ReportStatus::Unassigned,
        ReportStatus::Pending,
        ReportStatus::InProgress,
        ReportStatus::Resolved,
        ReportStatus::Dismissed,
        ReportStatus::UnderReview,
        ReportStatus::ForRevision,
    ];

    /// Label shown to users
    pub fn display_name(&self) -> &'static str {
        match self {
            ReportStatus::Unassigned => "Unassigned",
            ReportStatus::Pending => "Pending",
            ReportStatus::InProgress => "In Progress",
            ReportStatus::Resolved => "Resolved",
            ReportStatus::Dismissed => "Dismissed",
            ReportStatus::UnderReview => "Under Review",
            ReportStatus::ForRevision => "For Revision",
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Unassigned => write!(f, "unassigned"),
            ReportStatus::Pending => write!(f, "pending"),
            ReportStatus::InProgress => write!(f, "in_progress"),
            ReportStatus::Resolved => write!(f, "resolved"),
            ReportStatus::Dismissed => write!(f, "dismissed"),
            ReportStatus::UnderReview => write!(f, "under_review"),
            ReportStatus::ForRevision => write!(f, "for_revision"),
        }
    }
}

/// Database model for report
#[derive(Debug, Clone, FromRow)]
pub struct Report {
    pub id: Uuid,
    pub description: String,
    pub reported_by: String,
    pub contact_number: String,
    pub infra_type_id: Uuid,
    pub status: ReportStatus,
    pub status_remark: Option<String>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub moderator_id: Option<Uuid>,
    /// Set while a resolution awaits sub-moderator confirmation
    pub is_requested: bool,
    pub is_read: bool,
    pub is_hidden: bool,
    pub hidden_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new report from a citizen submission
#[derive(Debug)]
pub struct CreateReport {
    pub description: String,
    pub reported_by: String,
    pub contact_number: String,
    pub infra_type_id: Uuid,
}
