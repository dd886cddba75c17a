use std::time::Duration;

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::notifications::models::{
    CreateNotification, Notification, NotificationKind,
};
use crate::features::reports::models::Report;
use crate::shared::constants::{NOTIFICATION_RETRY_BACKOFF_MS, NOTIFICATION_WRITE_ATTEMPTS};

const NOTIFICATION_COLUMNS: &str =
    "id, user_id, report_id, message, kind, is_read, created_at";

/// Service for notification fan-out and user-facing notification reads.
///
/// Fan-out operations only read rosters and write notification rows; a
/// failing write is logged and retried on transient errors, but never
/// surfaced to the caller as a request failure.
pub struct NotificationService {
    pool: PgPool,
}

impl NotificationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ===== Fan-out =====

    /// One new-report notification per active moderator whose infrastructure
    /// type matches the report's. Zero matches is success with zero writes.
    pub async fn notify_on_new_report(&self, report: &Report) -> Result<()> {
        let moderators = self.matching_moderators(report.infra_type_id).await?;

        self.fan_out(
            moderators,
            report,
            NotificationKind::NewReport,
            new_report_message(report),
        )
        .await;

        Ok(())
    }

    /// Same fan-out as a new report, fired when the report's moderator
    /// assignment changes
    pub async fn notify_on_transfer(&self, report: &Report) -> Result<()> {
        let moderators = self.matching_moderators(report.infra_type_id).await?;

        self.fan_out(
            moderators,
            report,
            NotificationKind::TransferredReport,
            transferred_report_message(report),
        )
        .await;

        Ok(())
    }

    /// Notify the sub-moderators delegated by the report's moderator that a
    /// resolution awaits their confirmation. No-op unless the report carries
    /// the pending-confirmation flag.
    pub async fn notify_on_status_change_awaiting_confirmation(
        &self,
        report: &Report,
    ) -> Result<()> {
        if !report.is_requested {
            return Ok(());
        }

        let Some(moderator_id) = report.moderator_id else {
            tracing::warn!(
                "Report {} awaits confirmation but has no moderator",
                report.id
            );
            return Ok(());
        };

        let sub_moderators: Vec<Uuid> = sqlx::query_scalar(
            "SELECT id FROM users WHERE is_sub_moderator AND assigned_moderator_id = $1",
        )
        .bind(moderator_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        self.fan_out(
            sub_moderators,
            report,
            NotificationKind::StatusChange,
            awaiting_confirmation_message(report),
        )
        .await;

        Ok(())
    }

    /// Single notification to the report's moderator after a sub-moderator
    /// approves or rejects a resolution
    pub async fn notify_on_submoderator_action(
        &self,
        report: &Report,
        approved: bool,
        actor_name: &str,
    ) -> Result<()> {
        let Some(moderator_id) = report.moderator_id else {
            tracing::warn!("Report {} has no moderator to notify", report.id);
            return Ok(());
        };

        let kind = if approved {
            NotificationKind::Approval
        } else {
            NotificationKind::Rejection
        };

        self.insert_with_retry(&CreateNotification {
            user_id: moderator_id,
            report_id: Some(report.id),
            message: submoderator_action_message(report, approved, actor_name),
            kind,
        })
        .await
    }

    // ===== User-facing reads =====

    /// Notifications visible to the acting user. Sub-moderators also see
    /// their assigned moderator's notifications.
    pub async fn list_for_user(&self, user: &AuthenticatedUser) -> Result<Vec<Notification>> {
        let mut visible_to = vec![user.id];
        if user.is_sub_moderator {
            if let Some(assigned) = user.assigned_moderator_id {
                visible_to.push(assigned);
            }
        }

        let query = format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications \
             WHERE user_id = ANY($1) \
             ORDER BY created_at DESC"
        );

        sqlx::query_as::<_, Notification>(&query)
            .bind(&visible_to)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    pub async fn mark_read(&self, id: Uuid, user_id: Uuid, is_read: bool) -> Result<Notification> {
        let query = format!(
            "UPDATE notifications SET is_read = $3 \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {NOTIFICATION_COLUMNS}"
        );

        sqlx::query_as::<_, Notification>(&query)
            .bind(id)
            .bind(user_id)
            .bind(is_read)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound(format!("Notification {} not found", id)))
    }

    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Notification {} not found",
                id
            )));
        }

        Ok(())
    }

    // ===== Internals =====

    async fn matching_moderators(&self, infra_type_id: Uuid) -> Result<Vec<Uuid>> {
        sqlx::query_scalar(
            "SELECT id FROM users \
             WHERE is_moderator AND NOT deactivated AND infra_type_id = $1",
        )
        .bind(infra_type_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    /// Write one notification per recipient. Each write is independent:
    /// a failure is logged and does not stop the remaining recipients.
    async fn fan_out(
        &self,
        recipients: Vec<Uuid>,
        report: &Report,
        kind: NotificationKind,
        message: String,
    ) {
        for user_id in recipients {
            let result = self
                .insert_with_retry(&CreateNotification {
                    user_id,
                    report_id: Some(report.id),
                    message: message.clone(),
                    kind,
                })
                .await;

            if let Err(e) = result {
                tracing::error!(
                    "Failed to create notification for user {} on report {}: {}",
                    user_id,
                    report.id,
                    e
                );
            }
        }
    }

    async fn insert_with_retry(&self, data: &CreateNotification) -> Result<()> {
        let mut attempt = 1;
        loop {
            match self.insert(data).await {
                Ok(()) => return Ok(()),
                Err(e) if attempt < NOTIFICATION_WRITE_ATTEMPTS && is_transient(&e) => {
                    tracing::warn!(
                        "Transient notification write failure (attempt {}): {}",
                        attempt,
                        e
                    );
                    attempt += 1;
                    tokio::time::sleep(Duration::from_millis(NOTIFICATION_RETRY_BACKOFF_MS)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn insert(&self, data: &CreateNotification) -> Result<()> {
        sqlx::query(
            "INSERT INTO notifications (user_id, report_id, message, kind) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(data.user_id)
        .bind(data.report_id)
        .bind(&data.message)
        .bind(data.kind)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(())
    }
}

fn is_transient(error: &AppError) -> bool {
    matches!(
        error,
        AppError::Database(sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut)
    )
}

fn new_report_message(report: &Report) -> String {
    format!("New report submitted: {}", report.description)
}

fn transferred_report_message(report: &Report) -> String {
    format!(
        "A report has been transferred to your infrastructure type: {}",
        report.description
    )
}

fn awaiting_confirmation_message(report: &Report) -> String {
    format!("A report is awaiting confirmation: {}", report.description)
}

fn submoderator_action_message(report: &Report, approved: bool, actor_name: &str) -> String {
    if approved {
        format!(
            "The report \"{}\" has been approved by {}.",
            report.description, actor_name
        )
    } else {
        format!(
            "The report \"{}\" was rejected by {}.",
            report.description, actor_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::models::ReportStatus;
    use chrono::Utc;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn sample_report() -> Report {
        Report {
            id: Uuid::new_v4(),
            description: "Broken water main on Session Road".to_string(),
            reported_by: Name().fake(),
            contact_number: "09171234567".to_string(),
            infra_type_id: Uuid::new_v4(),
            status: ReportStatus::Pending,
            status_remark: None,
            resolved_at: None,
            moderator_id: Some(Uuid::new_v4()),
            is_requested: false,
            is_read: false,
            is_hidden: false,
            hidden_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_fan_out_messages_carry_the_description() {
        let report = sample_report();

        assert_eq!(
            new_report_message(&report),
            "New report submitted: Broken water main on Session Road"
        );
        assert!(transferred_report_message(&report).contains(&report.description));
        assert!(awaiting_confirmation_message(&report).contains(&report.description));
    }

    #[test]
    fn test_submoderator_action_message_depends_on_outcome() {
        let report = sample_report();

        let approved = submoderator_action_message(&report, true, "Ana Santos");
        assert!(approved.contains("approved by Ana Santos"));

        let rejected = submoderator_action_message(&report, false, "Ana Santos");
        assert!(rejected.contains("rejected by Ana Santos"));
    }

    #[test]
    fn test_transient_error_classification() {
        assert!(is_transient(&AppError::Database(sqlx::Error::PoolTimedOut)));
        assert!(!is_transient(&AppError::Database(sqlx::Error::RowNotFound)));
        assert!(!is_transient(&AppError::NotFound("gone".to_string())));
    }
}
