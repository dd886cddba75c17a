use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::users::dtos::UpdateProfileDto;
use crate::features::users::models::{CreateUser, User};

const USER_COLUMNS: &str = "id, name, email, password_hash, contact_number, is_admin, \
     is_moderator, is_sub_moderator, deactivated, infra_type_id, assigned_moderator_id, \
     created_at, updated_at";

/// Service for user accounts and moderator rosters
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, data: &CreateUser) -> Result<User> {
        let query = format!(
            "INSERT INTO users (name, email, password_hash, contact_number, is_moderator, \
             is_sub_moderator, infra_type_id, assigned_moderator_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {USER_COLUMNS}"
        );

        sqlx::query_as::<_, User>(&query)
            .bind(&data.name)
            .bind(&data.email)
            .bind(&data.password_hash)
            .bind(&data.contact_number)
            .bind(data.is_moderator)
            .bind(data.is_sub_moderator)
            .bind(data.infra_type_id)
            .bind(data.assigned_moderator_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db) = &e {
                    if db.is_unique_violation() {
                        return AppError::Conflict("Email is already registered".to_string());
                    }
                }
                tracing::error!("Failed to create user: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<User> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");

        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");

        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    /// Moderators eligible for new-report and transfer fan-out:
    /// active accounts matching the report's infrastructure type
    pub async fn active_moderators_by_infra_type(&self, infra_type_id: Uuid) -> Result<Vec<User>> {
        let query = format!(
            "SELECT {USER_COLUMNS} FROM users \
             WHERE is_moderator AND NOT deactivated AND infra_type_id = $1"
        );

        sqlx::query_as::<_, User>(&query)
            .bind(infra_type_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    /// Sub-moderators delegated by the given moderator
    pub async fn sub_moderators_of(&self, moderator_id: Uuid) -> Result<Vec<User>> {
        let query = format!(
            "SELECT {USER_COLUMNS} FROM users \
             WHERE is_sub_moderator AND assigned_moderator_id = $1"
        );

        sqlx::query_as::<_, User>(&query)
            .bind(moderator_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    pub async fn update_profile(&self, id: Uuid, dto: &UpdateProfileDto) -> Result<User> {
        let query = format!(
            "UPDATE users \
             SET name = COALESCE($2, name), \
                 contact_number = COALESCE($3, contact_number), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {USER_COLUMNS}"
        );

        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(&dto.contact_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update profile: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }
}
