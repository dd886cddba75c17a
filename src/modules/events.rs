//! In-process entity-change event bus.
//!
//! Services publish a change event after every persisted write; consumers
//! (currently the change relay) subscribe through a broadcast channel.
//! Delivery is best-effort: publishing never blocks or fails the write that
//! produced the event, and slow consumers may observe a lagged stream.

use serde::Serialize;
use tokio::sync::broadcast;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeOp {
    Created,
    Updated,
    Deleted,
}

/// A persisted-entity change. `payload` carries whatever the consumer needs
/// beyond the id; for deletions it is the only surviving copy of the row.
#[derive(Debug, Clone, Serialize)]
pub struct EntityChange {
    pub entity: &'static str,
    pub op: ChangeOp,
    pub id: Uuid,
    pub payload: Option<serde_json::Value>,
}

#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<EntityChange>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish a change. A send error only means no subscriber is listening.
    pub fn publish(&self, change: EntityChange) {
        tracing::debug!(
            "Publishing change: {} {:?} {}",
            change.entity,
            change.op,
            change.id
        );
        let _ = self.tx.send(change);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EntityChange> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscriber_receives_published_change() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        let id = Uuid::new_v4();
        bus.publish(EntityChange {
            entity: "reports",
            op: ChangeOp::Deleted,
            id,
            payload: None,
        });

        let received = rx.recv().await.unwrap();
        assert_eq!(received.entity, "reports");
        assert_eq!(received.op, ChangeOp::Deleted);
        assert_eq!(received.id, id);
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_does_not_panic() {
        let bus = EventBus::new(16);
        bus.publish(EntityChange {
            entity: "reports",
            op: ChangeOp::Created,
            id: Uuid::new_v4(),
            payload: None,
        });
    }
}
