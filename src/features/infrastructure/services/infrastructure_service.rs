use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::infrastructure::models::InfrastructureType;

/// Service for infrastructure-type reference data
pub struct InfrastructureService {
    pool: PgPool,
}

impl InfrastructureService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<InfrastructureType>> {
        sqlx::query_as::<_, InfrastructureType>(
            "SELECT id, name, created_at FROM infrastructure_types ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list infrastructure types: {:?}", e);
            AppError::Database(e)
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<InfrastructureType> {
        sqlx::query_as::<_, InfrastructureType>(
            "SELECT id, name, created_at FROM infrastructure_types WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound(format!("Infrastructure type {} not found", id)))
    }
}
