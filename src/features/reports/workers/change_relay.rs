use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use uuid::Uuid;

use crate::modules::events::{ChangeOp, EntityChange, EventBus};
use crate::modules::sms::SmsSender;

/// Background worker that republishes persisted-entity changes.
///
/// The one change with a hard side effect is report deletion: the original
/// reporter gets an SMS notice built from the deleted event's payload.
/// Everything else is surfaced as relay traffic for push consumers.
pub struct ChangeRelay {
    events: EventBus,
    sms: Arc<dyn SmsSender>,
}

impl ChangeRelay {
    pub fn new(events: EventBus, sms: Arc<dyn SmsSender>) -> Self {
        Self { events, sms }
    }

    /// Run the relay in a background loop until the bus closes
    pub async fn run(&self) {
        tracing::info!("Starting change relay worker");

        let mut rx = self.events.subscribe();

        loop {
            match rx.recv().await {
                Ok(change) => self.handle(change).await,
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("Change relay lagged; skipped {} events", skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }

        tracing::info!("Change relay stopped: event bus closed");
    }

    async fn handle(&self, change: EntityChange) {
        if change.entity == "reports" && change.op == ChangeOp::Deleted {
            self.send_deletion_notice(&change).await;
        } else {
            tracing::debug!(
                "Relay observed {} {:?} {}",
                change.entity,
                change.op,
                change.id
            );
        }
    }

    async fn send_deletion_notice(&self, change: &EntityChange) {
        let Some(payload) = change.payload.as_ref() else {
            tracing::warn!("Deleted report {} carried no payload", change.id);
            return;
        };

        let reported_by = payload
            .get("reported_by")
            .and_then(|v| v.as_str())
            .unwrap_or("reporter");
        let Some(contact_number) = payload.get("contact_number").and_then(|v| v.as_str()) else {
            tracing::warn!("Deleted report {} carried no contact number", change.id);
            return;
        };

        let message = deletion_notice(reported_by, change.id);
        if let Err(e) = self.sms.send(contact_number, &message).await {
            tracing::error!(
                "Failed to send deletion notice for report {}: {}",
                change.id,
                e
            );
        }
    }
}

fn deletion_notice(reported_by: &str, report_id: Uuid) -> String {
    [
        "InfraSee".to_string(),
        format!(
            "Hello {}, your report with ID {} has been deleted due to inactivity.",
            reported_by, report_id
        ),
        "If this was a mistake, please resubmit the report.".to_string(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deletion_notice_addresses_the_reporter() {
        let id = Uuid::new_v4();
        let notice = deletion_notice("Juan Dela Cruz", id);

        assert!(notice.starts_with("InfraSee\n"));
        assert!(notice.contains("Hello Juan Dela Cruz"));
        assert!(notice.contains(&id.to_string()));
        assert!(notice.ends_with("please resubmit the report."));
    }
}
