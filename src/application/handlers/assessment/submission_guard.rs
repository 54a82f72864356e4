//! Resubmission window check.

use std::sync::Arc;

use crate::domain::assessment::{resubmission_window_start, AssessmentError};
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::ports::AssessmentRepository;

/// Answers whether a user may submit another assessment.
///
/// A user is blocked while any of their SUBMITTED assessments was created
/// within the last 30 days. Drafts never block.
pub struct SubmissionGuard {
    assessments: Arc<dyn AssessmentRepository>,
}

impl SubmissionGuard {
    pub fn new(assessments: Arc<dyn AssessmentRepository>) -> Self {
        Self { assessments }
    }

    pub async fn can_submit(&self, user_id: &UserId, now: Timestamp) -> Result<bool, DomainError> {
        let since = resubmission_window_start(now);
        let blocked = self.assessments.has_submitted_since(user_id, since).await?;
        Ok(!blocked)
    }

    /// Like `can_submit`, but turns a block into `ResubmissionTooSoon`.
    pub async fn ensure_can_submit(&self, user_id: &UserId, now: Timestamp) -> Result<(), AssessmentError> {
        if self.can_submit(user_id, now).await? {
            Ok(())
        } else {
            Err(AssessmentError::ResubmissionTooSoon(*user_id))
        }
    }
}
