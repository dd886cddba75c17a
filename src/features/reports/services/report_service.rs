use std::sync::Arc;

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::config::WorkflowConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::notifications::services::NotificationService;
use crate::features::reports::dtos::{TransferReportDto, UpdateReportStatusDto};
use crate::features::reports::models::{CreateReport, Report, ReportStatus};
use crate::features::reports::policy::{self, TransitionRequest};
use crate::modules::events::{ChangeOp, EntityChange, EventBus};

const REPORT_COLUMNS: &str = "id, description, reported_by, contact_number, infra_type_id, \
     status, status_remark, resolved_at, moderator_id, is_requested, is_read, is_hidden, \
     hidden_at, created_at, updated_at";

/// Service for report lifecycle and the status workflow
pub struct ReportService {
    pool: PgPool,
    resolution_min_gap: chrono::Duration,
    notifications: Arc<NotificationService>,
    events: EventBus,
}

impl ReportService {
    pub fn new(
        pool: PgPool,
        workflow: &WorkflowConfig,
        notifications: Arc<NotificationService>,
        events: EventBus,
    ) -> Self {
        let resolution_min_gap = chrono::Duration::from_std(workflow.resolution_min_gap)
            .unwrap_or_else(|_| chrono::Duration::hours(1));

        Self {
            pool,
            resolution_min_gap,
            notifications,
            events,
        }
    }

    /// Create a report from a citizen submission. Reports start Unassigned;
    /// moderators of the matching infrastructure type are notified.
    pub async fn create(&self, data: &CreateReport) -> Result<Report> {
        let query = format!(
            "INSERT INTO reports (description, reported_by, contact_number, infra_type_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {REPORT_COLUMNS}"
        );

        let report = sqlx::query_as::<_, Report>(&query)
            .bind(&data.description)
            .bind(&data.reported_by)
            .bind(&data.contact_number)
            .bind(data.infra_type_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create report: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("Created report {} from {}", report.id, report.reported_by);

        self.events.publish(EntityChange {
            entity: "reports",
            op: ChangeOp::Created,
            id: report.id,
            payload: None,
        });

        if let Err(e) = self.notifications.notify_on_new_report(&report).await {
            tracing::warn!(
                "Failed to fan out new-report notifications for {}: {}",
                report.id,
                e
            );
        }

        Ok(report)
    }

    pub async fn list(&self) -> Result<Vec<Report>> {
        let query = format!(
            "SELECT {REPORT_COLUMNS} FROM reports WHERE NOT is_hidden ORDER BY created_at DESC"
        );

        sqlx::query_as::<_, Report>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    pub async fn list_hidden(&self) -> Result<Vec<Report>> {
        let query = format!(
            "SELECT {REPORT_COLUMNS} FROM reports WHERE is_hidden ORDER BY hidden_at DESC"
        );

        sqlx::query_as::<_, Report>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    pub async fn list_by_moderator(&self, moderator_id: Uuid) -> Result<Vec<Report>> {
        let query = format!(
            "SELECT {REPORT_COLUMNS} FROM reports \
             WHERE moderator_id = $1 AND NOT is_hidden \
             ORDER BY created_at DESC"
        );

        sqlx::query_as::<_, Report>(&query)
            .bind(moderator_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Report> {
        let query = format!("SELECT {REPORT_COLUMNS} FROM reports WHERE id = $1");

        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    /// Apply a validated status transition.
    ///
    /// The write is conditional on the status the transition was validated
    /// against, so two moderators racing on the same report cannot both
    /// succeed: the loser gets a 409 instead of silently overwriting.
    pub async fn update_status(
        &self,
        id: Uuid,
        dto: &UpdateReportStatusDto,
        actor: &AuthenticatedUser,
    ) -> Result<Report> {
        let report = self.get_by_id(id).await?;
        let now = Utc::now();

        let request = TransitionRequest {
            target: dto.status,
            remark: &dto.remark,
            resolved_at: dto.resolved_at,
        };
        policy::validate_transition(
            report.status,
            report.created_at,
            &request,
            now,
            self.resolution_min_gap,
        )?;

        // A resolution with confirmation requested parks the report in
        // Under Review until a sub-moderator signs off
        let confirmation = dto.request_confirmation && dto.status == ReportStatus::Resolved;
        let (persist_status, is_requested) = if confirmation {
            (ReportStatus::UnderReview, true)
        } else {
            (dto.status, false)
        };
        let resolved_at = if dto.status == ReportStatus::Resolved {
            dto.resolved_at
        } else {
            None
        };

        let query = format!(
            "UPDATE reports \
             SET status = $3, \
                 status_remark = $4, \
                 resolved_at = $5, \
                 is_requested = $6, \
                 moderator_id = COALESCE(moderator_id, $7), \
                 updated_at = NOW() \
             WHERE id = $1 AND status = $2 \
             RETURNING {REPORT_COLUMNS}"
        );

        let updated = sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .bind(report.status)
            .bind(persist_status)
            .bind(dto.remark.trim())
            .bind(resolved_at)
            .bind(is_requested)
            .bind(actor.id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update report status: {:?}", e);
                AppError::Database(e)
            })?;

        let updated = match updated {
            Some(report) => report,
            None => {
                // The precondition failed: either the report is gone or its
                // status moved under us
                self.get_by_id(id).await?;
                return Err(AppError::Conflict(
                    "Report status changed concurrently; reload and retry".to_string(),
                ));
            }
        };

        tracing::info!(
            "Report {} moved from {} to {} by {}",
            updated.id,
            report.status,
            updated.status,
            actor.id
        );

        self.events.publish(EntityChange {
            entity: "reports",
            op: ChangeOp::Updated,
            id: updated.id,
            payload: None,
        });

        if updated.is_requested {
            if let Err(e) = self
                .notifications
                .notify_on_status_change_awaiting_confirmation(&updated)
                .await
            {
                tracing::warn!(
                    "Failed to fan out confirmation notifications for {}: {}",
                    updated.id,
                    e
                );
            }
        }

        Ok(updated)
    }

    /// Reassign a report to another moderator. The report follows the new
    /// moderator's infrastructure type and that roster is notified.
    pub async fn transfer(&self, id: Uuid, dto: &TransferReportDto) -> Result<Report> {
        let target: Option<(bool, bool, Option<Uuid>)> = sqlx::query_as(
            "SELECT is_moderator, deactivated, infra_type_id FROM users WHERE id = $1",
        )
        .bind(dto.moderator_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let infra_type_id = match target {
            Some((true, false, Some(infra_type_id))) => infra_type_id,
            Some(_) => {
                return Err(AppError::Validation(
                    "Transfer target must be an active moderator with an infrastructure type"
                        .to_string(),
                ))
            }
            None => {
                return Err(AppError::NotFound(format!(
                    "User {} not found",
                    dto.moderator_id
                )))
            }
        };

        let query = format!(
            "UPDATE reports \
             SET moderator_id = $2, infra_type_id = $3, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {REPORT_COLUMNS}"
        );

        let updated = sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .bind(dto.moderator_id)
            .bind(infra_type_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))?;

        tracing::info!(
            "Report {} transferred to moderator {}",
            updated.id,
            dto.moderator_id
        );

        self.events.publish(EntityChange {
            entity: "reports",
            op: ChangeOp::Updated,
            id: updated.id,
            payload: None,
        });

        if let Err(e) = self.notifications.notify_on_transfer(&updated).await {
            tracing::warn!(
                "Failed to fan out transfer notifications for {}: {}",
                updated.id,
                e
            );
        }

        Ok(updated)
    }

    /// Sub-moderator confirms a resolution: Under Review becomes Resolved
    pub async fn approve_resolution(
        &self,
        id: Uuid,
        actor: &AuthenticatedUser,
    ) -> Result<Report> {
        let report = self.ensure_awaiting_confirmation(id, actor).await?;
        let updated = self
            .finish_confirmation(report, ReportStatus::Resolved, false)
            .await?;

        if let Err(e) = self
            .notifications
            .notify_on_submoderator_action(&updated, true, &actor.name)
            .await
        {
            tracing::warn!("Failed to notify moderator of approval: {}", e);
        }

        Ok(updated)
    }

    /// Sub-moderator rejects a resolution: the report returns to the
    /// moderator as For Revision with the resolution time cleared
    pub async fn reject_resolution(&self, id: Uuid, actor: &AuthenticatedUser) -> Result<Report> {
        let report = self.ensure_awaiting_confirmation(id, actor).await?;
        let updated = self
            .finish_confirmation(report, ReportStatus::ForRevision, true)
            .await?;

        if let Err(e) = self
            .notifications
            .notify_on_submoderator_action(&updated, false, &actor.name)
            .await
        {
            tracing::warn!("Failed to notify moderator of rejection: {}", e);
        }

        Ok(updated)
    }

    async fn ensure_awaiting_confirmation(
        &self,
        id: Uuid,
        actor: &AuthenticatedUser,
    ) -> Result<Report> {
        let report = self.get_by_id(id).await?;

        if report.status != ReportStatus::UnderReview || !report.is_requested {
            return Err(AppError::InvalidTransition(
                "Report is not awaiting confirmation".to_string(),
            ));
        }

        if report.moderator_id.is_none() || report.moderator_id != actor.assigned_moderator_id {
            return Err(AppError::Forbidden(
                "Report does not belong to your assigned moderator".to_string(),
            ));
        }

        Ok(report)
    }

    async fn finish_confirmation(
        &self,
        report: Report,
        target: ReportStatus,
        clear_resolved_at: bool,
    ) -> Result<Report> {
        let query = format!(
            "UPDATE reports \
             SET status = $2, \
                 is_requested = FALSE, \
                 resolved_at = CASE WHEN $3 THEN NULL ELSE resolved_at END, \
                 updated_at = NOW() \
             WHERE id = $1 AND status = 'under_review' \
             RETURNING {REPORT_COLUMNS}"
        );

        let updated = sqlx::query_as::<_, Report>(&query)
            .bind(report.id)
            .bind(target)
            .bind(clear_resolved_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| {
                AppError::Conflict(
                    "Report status changed concurrently; reload and retry".to_string(),
                )
            })?;

        self.events.publish(EntityChange {
            entity: "reports",
            op: ChangeOp::Updated,
            id: updated.id,
            payload: None,
        });

        Ok(updated)
    }

    pub async fn mark_read(&self, id: Uuid, is_read: bool) -> Result<Report> {
        let query = format!(
            "UPDATE reports SET is_read = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {REPORT_COLUMNS}"
        );

        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .bind(is_read)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    /// Archive a report. Archived reports are excluded from the default
    /// listings but keep their full history.
    pub async fn hide(&self, id: Uuid) -> Result<Report> {
        let query = format!(
            "UPDATE reports SET is_hidden = TRUE, hidden_at = NOW(), updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {REPORT_COLUMNS}"
        );

        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    pub async fn restore(&self, id: Uuid) -> Result<Report> {
        let query = format!(
            "UPDATE reports SET is_hidden = FALSE, hidden_at = NULL, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {REPORT_COLUMNS}"
        );

        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    /// Hard-delete a report. The deleted event carries the reporter's name
    /// and contact number so the change relay can send the SMS notice.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let report = self.get_by_id(id).await?;

        let result = sqlx::query("DELETE FROM reports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Report {} not found", id)));
        }

        tracing::info!("Deleted report {}", id);

        self.events.publish(EntityChange {
            entity: "reports",
            op: ChangeOp::Deleted,
            id,
            payload: Some(serde_json::json!({
                "reported_by": report.reported_by,
                "contact_number": report.contact_number,
            })),
        });

        Ok(())
    }
}
