//! CreateAssessmentHandler - Command handler for new self-assessments.

use std::sync::Arc;

use tracing::{info, warn};

use super::{ScoringEngine, SubmissionGuard};
use crate::application::{DomainEventEmitter, KeyedLocks};
use crate::domain::assessment::{
    validate_ratings, validate_reflection, Assessment, AssessmentError, RatedDimension,
    SubmissionStatus,
};
use crate::domain::foundation::{AssessmentId, DimensionId, Timestamp, UserId};
use crate::ports::{AssessmentRepository, DimensionCatalog};

/// Command to create an assessment.
#[derive(Debug, Clone)]
pub struct CreateAssessmentCommand {
    pub user_id: UserId,
    pub reflection: String,
    pub status: SubmissionStatus,
    pub ratings: Vec<RatedDimension>,
}

/// Handler for creating assessments.
///
/// Steps run in order and each one gates the next: input validation, batch
/// dimension check, resubmission guard, scoring, persistence, event. The
/// guard and the insert run under the user's lock.
pub struct CreateAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
    guard: SubmissionGuard,
    scoring: ScoringEngine,
    emitter: Arc<DomainEventEmitter>,
    locks: Arc<KeyedLocks<UserId>>,
}

impl CreateAssessmentHandler {
    pub fn new(
        repository: Arc<dyn AssessmentRepository>,
        catalog: Arc<dyn DimensionCatalog>,
        emitter: Arc<DomainEventEmitter>,
        locks: Arc<KeyedLocks<UserId>>,
    ) -> Self {
        Self {
            guard: SubmissionGuard::new(repository.clone()),
            scoring: ScoringEngine::new(catalog),
            repository,
            emitter,
            locks,
        }
    }

    pub async fn handle(&self, cmd: CreateAssessmentCommand) -> Result<Assessment, AssessmentError> {
        validate_reflection(&cmd.reflection)?;
        validate_ratings(&cmd.ratings)?;

        // 1. Every referenced dimension must exist
        let ids: Vec<DimensionId> = cmd.ratings.iter().map(|r| r.dimension_id).collect();
        self.scoring.verify_known(&ids).await?;

        let user_lock = self.locks.lock(cmd.user_id).await;
        let now = Timestamp::now();

        // 2. Resubmission window
        if let Err(err) = self.guard.ensure_can_submit(&cmd.user_id, now).await {
            if matches!(err, AssessmentError::ResubmissionTooSoon(_)) {
                warn!(user_id = %cmd.user_id, "Assessment rejected, submitted within the last 30 days");
            }
            return Err(err);
        }

        // 3. Score
        let average_score = self.scoring.weighted_average(&cmd.ratings).await?;

        // 4. Persist header and ratings together
        let assessment = Assessment::scored(
            AssessmentId::new(),
            cmd.user_id,
            cmd.reflection,
            cmd.status,
            cmd.ratings,
            average_score,
            now,
        )?;
        self.repository.save(&assessment).await?;
        drop(user_lock);

        info!(
            assessment_id = %assessment.id(),
            user_id = %assessment.user_id(),
            status = %assessment.status(),
            average_score,
            "Assessment created"
        );

        // 5. Best-effort event
        self.emitter.assessment_submitted(&assessment).await;

        Ok(assessment)
    }
}
