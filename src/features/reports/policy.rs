//! The report status workflow: the fixed transition graph and the pure
//! validation applied before any transition is persisted.
//!
//! The graph is the single source of truth; UI clients render
//! `GET /api/status?current=…` and never define their own table.

use chrono::{DateTime, Utc};

use crate::core::error::{AppError, Result};
use crate::features::reports::models::ReportStatus;
use crate::shared::constants::{DISMISSAL_REASONS, MAX_REMARK_LENGTH};

/// Statuses a report may move to from `status`. Terminal statuses
/// (Dismissed, Resolved, Under Review) return the empty set.
pub fn allowed_next(status: ReportStatus) -> &'static [ReportStatus] {
    match status {
        ReportStatus::Unassigned => &[ReportStatus::Pending],
        ReportStatus::Pending => &[
            ReportStatus::InProgress,
            ReportStatus::Dismissed,
            ReportStatus::Unassigned,
        ],
        ReportStatus::InProgress => &[ReportStatus::Resolved, ReportStatus::Pending],
        ReportStatus::ForRevision => &[ReportStatus::Resolved],
        ReportStatus::Dismissed | ReportStatus::Resolved | ReportStatus::UnderReview => &[],
    }
}

/// Options a client should render for a report in `status`: the current
/// status first (selected), then the allowed targets. Submitting the
/// current status still fails validation.
pub fn display_options(status: ReportStatus) -> Vec<ReportStatus> {
    let mut options = vec![status];
    options.extend_from_slice(allowed_next(status));
    options
}

/// A requested transition, before persistence
#[derive(Debug)]
pub struct TransitionRequest<'a> {
    pub target: ReportStatus,
    pub remark: &'a str,
    pub resolved_at: Option<DateTime<Utc>>,
}

/// Validate a transition against the policy graph, the remark rules, and
/// the resolution-time bounds. Pure: callers supply `now` and the minimum
/// creation-to-resolution gap.
pub fn validate_transition(
    current: ReportStatus,
    created_at: DateTime<Utc>,
    request: &TransitionRequest<'_>,
    now: DateTime<Utc>,
    min_gap: chrono::Duration,
) -> Result<()> {
    if request.target == current {
        return Err(AppError::InvalidTransition(format!(
            "Report is already {}",
            current.display_name()
        )));
    }

    if !allowed_next(current).contains(&request.target) {
        return Err(AppError::InvalidTransition(format!(
            "Cannot move a report from {} to {}",
            current.display_name(),
            request.target.display_name()
        )));
    }

    if request.target == ReportStatus::Dismissed {
        if !DISMISSAL_REASONS.contains(&request.remark) {
            return Err(AppError::Validation(
                "Dismissal remark must be one of the listed reasons".to_string(),
            ));
        }
    } else {
        let remark = request.remark.trim();
        if remark.is_empty() {
            return Err(AppError::Validation("Status remark is required".to_string()));
        }
        if remark.chars().count() > MAX_REMARK_LENGTH {
            return Err(AppError::Validation(format!(
                "Status remark must not exceed {} characters",
                MAX_REMARK_LENGTH
            )));
        }
    }

    if request.target == ReportStatus::Resolved {
        let resolved_at = request.resolved_at.ok_or_else(|| {
            AppError::Validation("Resolution time is required".to_string())
        })?;

        if resolved_at < created_at + min_gap {
            return Err(AppError::Validation(format!(
                "Resolution time must be at least {} minutes after the report was filed",
                min_gap.num_minutes()
            )));
        }

        if resolved_at > now {
            return Err(AppError::Validation(
                "Resolution time cannot be in the future".to_string(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn one_hour() -> Duration {
        Duration::hours(1)
    }

    fn resolve_request(resolved_at: Option<DateTime<Utc>>) -> TransitionRequest<'static> {
        TransitionRequest {
            target: ReportStatus::Resolved,
            remark: "Repairs completed and verified on site.",
            resolved_at,
        }
    }

    #[test]
    fn test_allowed_next_matches_fixed_graph() {
        assert_eq!(
            allowed_next(ReportStatus::Unassigned),
            &[ReportStatus::Pending]
        );
        assert_eq!(
            allowed_next(ReportStatus::Pending),
            &[
                ReportStatus::InProgress,
                ReportStatus::Dismissed,
                ReportStatus::Unassigned
            ]
        );
        assert_eq!(
            allowed_next(ReportStatus::InProgress),
            &[ReportStatus::Resolved, ReportStatus::Pending]
        );
        assert_eq!(
            allowed_next(ReportStatus::ForRevision),
            &[ReportStatus::Resolved]
        );
    }

    #[test]
    fn test_terminal_statuses_have_no_outgoing_edges() {
        assert!(allowed_next(ReportStatus::Dismissed).is_empty());
        assert!(allowed_next(ReportStatus::Resolved).is_empty());
        assert!(allowed_next(ReportStatus::UnderReview).is_empty());
    }

    #[test]
    fn test_display_options_include_current_status_first() {
        let options = display_options(ReportStatus::Pending);
        assert_eq!(options[0], ReportStatus::Pending);
        assert_eq!(options.len(), 4);

        // Terminal statuses still display themselves
        assert_eq!(
            display_options(ReportStatus::Dismissed),
            vec![ReportStatus::Dismissed]
        );
    }

    #[test]
    fn test_same_status_rejected_even_with_valid_remark() {
        let now = Utc::now();
        let request = TransitionRequest {
            target: ReportStatus::Pending,
            remark: "Re-checking assignment.",
            resolved_at: None,
        };

        let result = validate_transition(
            ReportStatus::Pending,
            now - Duration::days(1),
            &request,
            now,
            one_hour(),
        );
        assert!(matches!(result, Err(AppError::InvalidTransition(_))));
    }

    #[test]
    fn test_transition_out_of_terminal_status_rejected() {
        let now = Utc::now();
        let request = TransitionRequest {
            target: ReportStatus::Pending,
            remark: "Reopening.",
            resolved_at: None,
        };

        for terminal in [
            ReportStatus::Dismissed,
            ReportStatus::Resolved,
            ReportStatus::UnderReview,
        ] {
            let result =
                validate_transition(terminal, now - Duration::days(1), &request, now, one_hour());
            assert!(matches!(result, Err(AppError::InvalidTransition(_))));
        }
    }

    #[test]
    fn test_empty_remark_rejected() {
        let now = Utc::now();
        let request = TransitionRequest {
            target: ReportStatus::InProgress,
            remark: "   ",
            resolved_at: None,
        };

        let result = validate_transition(
            ReportStatus::Pending,
            now - Duration::days(1),
            &request,
            now,
            one_hour(),
        );
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_remark_length_boundary() {
        let now = Utc::now();
        let created_at = now - Duration::days(1);

        let at_limit = "x".repeat(MAX_REMARK_LENGTH);
        let request = TransitionRequest {
            target: ReportStatus::InProgress,
            remark: &at_limit,
            resolved_at: None,
        };
        assert!(validate_transition(ReportStatus::Pending, created_at, &request, now, one_hour())
            .is_ok());

        let over_limit = "x".repeat(MAX_REMARK_LENGTH + 1);
        let request = TransitionRequest {
            target: ReportStatus::InProgress,
            remark: &over_limit,
            resolved_at: None,
        };
        let result =
            validate_transition(ReportStatus::Pending, created_at, &request, now, one_hour());
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_dismissal_requires_canned_reason() {
        let now = Utc::now();
        let created_at = now - Duration::days(1);

        let request = TransitionRequest {
            target: ReportStatus::Dismissed,
            remark: "Just because",
            resolved_at: None,
        };
        let result =
            validate_transition(ReportStatus::Pending, created_at, &request, now, one_hour());
        assert!(matches!(result, Err(AppError::Validation(_))));

        let request = TransitionRequest {
            target: ReportStatus::Dismissed,
            remark: DISMISSAL_REASONS[0],
            resolved_at: None,
        };
        assert!(validate_transition(ReportStatus::Pending, created_at, &request, now, one_hour())
            .is_ok());
    }

    #[test]
    fn test_resolution_time_required() {
        let now = Utc::now();
        let result = validate_transition(
            ReportStatus::InProgress,
            now - Duration::days(1),
            &resolve_request(None),
            now,
            one_hour(),
        );
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_resolution_below_minimum_gap_rejected() {
        let now = Utc::now();
        let created_at = now - Duration::hours(2);

        let result = validate_transition(
            ReportStatus::InProgress,
            created_at,
            &resolve_request(Some(created_at + Duration::minutes(30))),
            now,
            one_hour(),
        );
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_resolution_exactly_at_minimum_gap_accepted() {
        let now = Utc::now();
        let created_at = now - Duration::hours(2);

        let result = validate_transition(
            ReportStatus::InProgress,
            created_at,
            &resolve_request(Some(created_at + Duration::hours(1))),
            now,
            one_hour(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_resolution_in_the_future_rejected() {
        let now = Utc::now();
        let created_at = now - Duration::hours(2);

        let result = validate_transition(
            ReportStatus::InProgress,
            created_at,
            &resolve_request(Some(now + Duration::minutes(5))),
            now,
            one_hour(),
        );
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_rejected_then_accepted_resubmission() {
        let now = Utc::now();
        let created_at = now - Duration::hours(2);

        // T + 30min: below the floor
        let result = validate_transition(
            ReportStatus::InProgress,
            created_at,
            &resolve_request(Some(created_at + Duration::minutes(30))),
            now,
            one_hour(),
        );
        assert!(matches!(result, Err(AppError::Validation(_))));

        // T + 90min: accepted
        let result = validate_transition(
            ReportStatus::InProgress,
            created_at,
            &resolve_request(Some(created_at + Duration::minutes(90))),
            now,
            one_hour(),
        );
        assert!(result.is_ok());
    }
}
