//! Assessment domain events.
//!
//! - `AssessmentSubmitted` - a new assessment was persisted
//! - `AssessmentUpdated` - reflection or status of an existing one changed

use serde::{Deserialize, Serialize};

use super::{Assessment, SubmissionStatus};
use crate::domain::foundation::{domain_event, AssessmentId, EventId, EventKind, Timestamp, UserId};
use crate::domain::user::UserContext;

/// Published after an assessment write has been persisted.
///
/// One struct serves both kinds; `event_kind` says which.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentEvent {
    pub event_id: EventId,
    pub event_kind: EventKind,
    pub assessment_id: AssessmentId,
    pub user_id: UserId,
    pub reflection: String,
    pub average_score: i32,
    pub submission_status: SubmissionStatus,
    pub user_context: UserContext,
    #[serde(rename = "timestamp")]
    pub occurred_at: Timestamp,
}

domain_event!(
    AssessmentEvent,
    kind_field = event_kind,
    aggregate_id = assessment_id,
    aggregate_type = "Assessment",
    occurred_at = occurred_at,
    event_id = event_id
);

impl AssessmentEvent {
    fn from_assessment(kind: EventKind, assessment: &Assessment, user_context: UserContext) -> Self {
        Self {
            event_id: EventId::new(),
            event_kind: kind,
            assessment_id: assessment.id(),
            user_id: assessment.user_id(),
            reflection: assessment.reflection().to_string(),
            average_score: assessment.average_score(),
            submission_status: assessment.status(),
            user_context,
            occurred_at: Timestamp::now(),
        }
    }

    pub fn submitted(assessment: &Assessment, user_context: UserContext) -> Self {
        Self::from_assessment(EventKind::AssessmentSubmitted, assessment, user_context)
    }

    pub fn updated(assessment: &Assessment, user_context: UserContext) -> Self {
        Self::from_assessment(EventKind::AssessmentUpdated, assessment, user_context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::RatedDimension;
    use crate::domain::foundation::{DimensionId, DomainEvent, Rating};

    fn assessment() -> Assessment {
        Assessment::scored(
            AssessmentId::new(),
            UserId::new(),
            "Mentored two juniors",
            SubmissionStatus::Submitted,
            vec![RatedDimension::new(DimensionId::new(), Rating::new(5).unwrap())],
            5,
            Timestamp::now(),
        )
        .unwrap()
    }

    #[test]
    fn submitted_event_carries_assessment_snapshot() {
        let a = assessment();
        let event = AssessmentEvent::submitted(&a, UserContext::unknown(a.user_id()));

        assert_eq!(event.event_kind(), EventKind::AssessmentSubmitted);
        assert_eq!(event.aggregate_id(), a.id().to_string());
        assert_eq!(event.aggregate_type(), "Assessment");
        assert_eq!(event.average_score, 5);
    }

    #[test]
    fn payload_uses_camel_case_wire_names() {
        let a = assessment();
        let event = AssessmentEvent::updated(&a, UserContext::unknown(a.user_id()));
        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(value["eventKind"], "ASSESSMENT_UPDATED");
        assert_eq!(value["submissionStatus"], "SUBMITTED");
        assert_eq!(value["averageScore"], 5);
        assert_eq!(value["userContext"]["role"], "UNKNOWN");
        assert!(value.get("timestamp").is_some());
    }
}
