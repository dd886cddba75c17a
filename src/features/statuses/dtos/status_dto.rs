use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::reports::models::ReportStatus;
use crate::features::reports::policy;

/// Response DTO for a status registry entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusResponseDto {
    /// Stable identifier, used in transition requests
    pub name: ReportStatus,
    /// Label shown to users
    pub label: String,
    /// Terminal statuses have no outgoing transitions
    pub terminal: bool,
    /// Statuses a report may move to from this one
    pub allowed_next: Vec<ReportStatus>,
}

impl From<ReportStatus> for StatusResponseDto {
    fn from(status: ReportStatus) -> Self {
        let allowed_next = policy::allowed_next(status).to_vec();
        Self {
            name: status,
            label: status.display_name().to_string(),
            terminal: allowed_next.is_empty(),
            allowed_next,
        }
    }
}
