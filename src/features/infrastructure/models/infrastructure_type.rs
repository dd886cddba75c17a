use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for infrastructure type
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct InfrastructureType {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
