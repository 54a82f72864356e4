//! UpdateAssessmentHandler - Command handler for reflection and status changes.

use std::sync::Arc;

use tracing::{info, warn};

use super::SubmissionGuard;
use crate::application::{DomainEventEmitter, KeyedLocks};
use crate::domain::assessment::{Assessment, AssessmentError, SubmissionStatus};
use crate::domain::foundation::{AssessmentId, StateMachine, Timestamp, UserId};
use crate::ports::AssessmentRepository;

/// Command to update an assessment. `None` fields are left alone.
#[derive(Debug, Clone)]
pub struct UpdateAssessmentCommand {
    pub assessment_id: AssessmentId,
    pub reflection: Option<String>,
    pub status: Option<SubmissionStatus>,
}

/// Handler for updating assessments.
///
/// The score and rated dimensions never change here. Promotion to
/// SUBMITTED is checked against the resubmission window under the user's
/// lock.
pub struct UpdateAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
    guard: SubmissionGuard,
    emitter: Arc<DomainEventEmitter>,
    locks: Arc<KeyedLocks<UserId>>,
}

impl UpdateAssessmentHandler {
    pub fn new(
        repository: Arc<dyn AssessmentRepository>,
        emitter: Arc<DomainEventEmitter>,
        locks: Arc<KeyedLocks<UserId>>,
    ) -> Self {
        Self {
            guard: SubmissionGuard::new(repository.clone()),
            repository,
            emitter,
            locks,
        }
    }

    pub async fn handle(&self, cmd: UpdateAssessmentCommand) -> Result<Assessment, AssessmentError> {
        let owner = self.load(&cmd.assessment_id).await?.user_id();
        let user_lock = self.locks.lock(owner).await;

        // Re-read under the lock
        let mut assessment = self.load(&cmd.assessment_id).await?;
        let now = Timestamp::now();

        if let Some(reflection) = cmd.reflection {
            assessment.replace_reflection(reflection, now)?;
        }

        if let Some(target) = cmd.status {
            let current = assessment.status();
            if current != target {
                if !current.can_transition_to(&target) {
                    return Err(AssessmentError::InvalidStatusTransition {
                        from: current,
                        to: target,
                    });
                }
                if target.is_submitted() {
                    if let Err(err) = self.guard.ensure_can_submit(&owner, now).await {
                        warn!(user_id = %owner, assessment_id = %cmd.assessment_id, "Promotion rejected by resubmission window");
                        return Err(err);
                    }
                }
                assessment.change_status(target, now)?;
            }
        }

        self.repository.update(&assessment).await?;
        drop(user_lock);

        info!(
            assessment_id = %assessment.id(),
            status = %assessment.status(),
            "Assessment updated"
        );

        self.emitter.assessment_updated(&assessment).await;

        Ok(assessment)
    }

    async fn load(&self, id: &AssessmentId) -> Result<Assessment, AssessmentError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AssessmentError::NotFound(*id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Harness;
    use crate::domain::assessment::RatedDimension;
    use crate::domain::foundation::{DimensionId, ErrorCategory, EventKind, Rating};

    async fn stored(h: &Harness, user: UserId, status: SubmissionStatus, created_at: Timestamp) -> Assessment {
        let assessment = Assessment::reconstitute(
            AssessmentId::new(),
            user,
            status,
            "First draft".to_string(),
            vec![RatedDimension::new(DimensionId::new(), Rating::new(3).unwrap())],
            3,
            created_at,
            created_at,
        );
        h.assessments.save(&assessment).await.unwrap();
        assessment
    }

    fn handler(h: &Harness) -> UpdateAssessmentHandler {
        UpdateAssessmentHandler::new(h.assessments.clone(), h.emitter.clone(), h.user_locks.clone())
    }

    #[tokio::test]
    async fn replaces_reflection_and_emits_update() {
        let h = Harness::seeded().await;
        let original = stored(&h, UserId::new(), SubmissionStatus::Draft, Timestamp::now()).await;

        let updated = handler(&h)
            .handle(UpdateAssessmentCommand {
                assessment_id: original.id(),
                reflection: Some("Final reflection".to_string()),
                status: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.reflection(), "Final reflection");
        assert_eq!(updated.average_score(), original.average_score());
        assert_eq!(updated.dimensions(), original.dimensions());

        let events = h.bus.events_of_kind(EventKind::AssessmentUpdated);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].payload["reflection"], "Final reflection");
    }

    #[tokio::test]
    async fn promotes_draft_when_window_is_clear() {
        let h = Harness::seeded().await;
        let draft = stored(&h, UserId::new(), SubmissionStatus::Draft, Timestamp::now()).await;

        let updated = handler(&h)
            .handle(UpdateAssessmentCommand {
                assessment_id: draft.id(),
                reflection: None,
                status: Some(SubmissionStatus::Submitted),
            })
            .await
            .unwrap();

        assert!(updated.is_submitted());
    }

    #[tokio::test]
    async fn promotion_within_window_conflicts() {
        let h = Harness::seeded().await;
        let user = UserId::new();
        stored(&h, user, SubmissionStatus::Submitted, Timestamp::now().minus_days(3)).await;
        let draft = stored(&h, user, SubmissionStatus::Draft, Timestamp::now()).await;

        let err = handler(&h)
            .handle(UpdateAssessmentCommand {
                assessment_id: draft.id(),
                reflection: None,
                status: Some(SubmissionStatus::Submitted),
            })
            .await
            .unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert_eq!(h.bus.event_count(), 0);
    }

    #[tokio::test]
    async fn demotion_is_invalid_request() {
        let h = Harness::seeded().await;
        let submitted = stored(&h, UserId::new(), SubmissionStatus::Submitted, Timestamp::now()).await;

        let err = handler(&h)
            .handle(UpdateAssessmentCommand {
                assessment_id: submitted.id(),
                reflection: None,
                status: Some(SubmissionStatus::Draft),
            })
            .await
            .unwrap_err();

        assert_eq!(
            err,
            AssessmentError::InvalidStatusTransition {
                from: SubmissionStatus::Submitted,
                to: SubmissionStatus::Draft,
            }
        );
        assert_eq!(err.category(), ErrorCategory::InvalidRequest);
    }

    #[tokio::test]
    async fn same_status_is_a_no_op_change() {
        let h = Harness::seeded().await;
        let submitted = stored(&h, UserId::new(), SubmissionStatus::Submitted, Timestamp::now()).await;

        let updated = handler(&h)
            .handle(UpdateAssessmentCommand {
                assessment_id: submitted.id(),
                reflection: None,
                status: Some(SubmissionStatus::Submitted),
            })
            .await
            .unwrap();

        assert!(updated.is_submitted());
    }

    #[tokio::test]
    async fn missing_assessment_is_not_found() {
        let h = Harness::seeded().await;
        let id = AssessmentId::new();

        let err = handler(&h)
            .handle(UpdateAssessmentCommand {
                assessment_id: id,
                reflection: Some("x".to_string()),
                status: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err, AssessmentError::NotFound(id));
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }
}
