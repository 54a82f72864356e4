//! Feedback domain events.
//!
//! - `FeedbackCreated` - complete feedback persisted
//! - `FeedbackUpdated` - header replaced
//! - `FeedbackDeleted` - record removed
//! - `FeedbackVersionCreated` - empty header opened for a new cycle

use serde::{Deserialize, Serialize};

use super::{Feedback, FeedbackVersion};
use crate::domain::foundation::{domain_event, EventId, EventKind, FeedbackId, Timestamp, UserId};
use crate::domain::user::UserContext;

/// Published after a feedback write. `event_kind` says which one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEvent {
    pub event_id: EventId,
    pub event_kind: EventKind,
    pub feedback_id: FeedbackId,
    pub manager_id: UserId,
    pub developer_id: UserId,
    pub feedback_version: FeedbackVersion,
    pub manager_context: UserContext,
    pub developer_context: UserContext,
    #[serde(rename = "timestamp")]
    pub occurred_at: Timestamp,
}

domain_event!(
    FeedbackEvent,
    kind_field = event_kind,
    aggregate_id = feedback_id,
    aggregate_type = "Feedback",
    occurred_at = occurred_at,
    event_id = event_id
);

impl FeedbackEvent {
    pub fn new(
        kind: EventKind,
        feedback: &Feedback,
        manager_context: UserContext,
        developer_context: UserContext,
    ) -> Self {
        Self {
            event_id: EventId::new(),
            event_kind: kind,
            feedback_id: feedback.id(),
            manager_id: feedback.manager_id(),
            developer_id: feedback.developer_id(),
            feedback_version: feedback.version(),
            manager_context,
            developer_context,
            occurred_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DomainEvent;

    #[test]
    fn event_carries_both_user_contexts() {
        let fb = Feedback::new(
            FeedbackId::new(),
            UserId::new(),
            UserId::new(),
            FeedbackVersion::new(2).unwrap(),
            Timestamp::now(),
        );
        let event = FeedbackEvent::new(
            EventKind::FeedbackVersionCreated,
            &fb,
            UserContext::unknown(fb.manager_id()),
            UserContext::unknown(fb.developer_id()),
        );

        assert_eq!(event.aggregate_type(), "Feedback");
        assert_eq!(event.event_kind(), EventKind::FeedbackVersionCreated);

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["feedbackVersion"], 2);
        assert_eq!(value["managerContext"]["userId"], fb.manager_id().to_string());
        assert_eq!(value["developerContext"]["userId"], fb.developer_id().to_string());
    }
}
