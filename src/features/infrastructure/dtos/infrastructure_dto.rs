use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::infrastructure::models::InfrastructureType;

/// Response DTO for infrastructure type
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InfrastructureTypeResponseDto {
    pub id: Uuid,
    pub name: String,
}

impl From<InfrastructureType> for InfrastructureTypeResponseDto {
    fn from(t: InfrastructureType) -> Self {
        Self {
            id: t.id,
            name: t.name,
        }
    }
}
