//! Analysis events.

use serde::{Deserialize, Serialize};

use super::AnalysisPayload;
use crate::domain::foundation::{domain_event, EventId, EventKind, FeedbackId, Timestamp};

/// Published after feedback creation for the analysis consumer.
///
/// Serializes as the bare `AnalysisPayload`; identity fields travel on the
/// envelope only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSubmitted {
    #[serde(skip)]
    pub event_id: EventId,
    #[serde(skip)]
    pub feedback_id: FeedbackId,
    #[serde(skip)]
    pub occurred_at: Timestamp,
    #[serde(flatten)]
    pub payload: AnalysisPayload,
}

domain_event!(
    AnalysisSubmitted,
    kind = EventKind::AnalysisSubmitted,
    aggregate_id = feedback_id,
    aggregate_type = "Feedback",
    occurred_at = occurred_at,
    event_id = event_id
);

impl AnalysisSubmitted {
    pub fn new(feedback_id: FeedbackId, payload: AnalysisPayload) -> Self {
        Self {
            event_id: EventId::new(),
            feedback_id,
            occurred_at: Timestamp::now(),
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainEvent, EventEnvelope, UserId};

    #[test]
    fn envelope_payload_is_the_bare_analysis_shape() {
        let feedback_id = FeedbackId::new();
        let developer = UserId::new();
        let event = AnalysisSubmitted::new(
            feedback_id,
            AnalysisPayload {
                subject_user_id: developer,
                ..AnalysisPayload::default()
            },
        );

        let envelope = EventEnvelope::from_event(&event).unwrap();

        assert_eq!(envelope.event_kind, EventKind::AnalysisSubmitted);
        assert_eq!(envelope.aggregate_id, feedback_id.to_string());
        assert_eq!(envelope.payload["userId"], developer.to_string());
        assert!(envelope.payload.get("eventId").is_none());
        assert!(envelope.payload.get("event_id").is_none());

        let payload: AnalysisPayload = envelope.payload_as().unwrap();
        assert_eq!(payload.subject_user_id, developer);
        assert_eq!(event.event_kind().routing_key(), "feedback.submitted");
    }
}
