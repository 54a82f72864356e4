//! Assessment repository port.
//!
//! Persists assessment headers together with their rated dimensions.

use async_trait::async_trait;

use crate::domain::assessment::Assessment;
use crate::domain::foundation::{AssessmentId, DomainError, Timestamp, UserId};

/// Repository port for Assessment aggregate persistence.
///
/// Implementations must ensure:
/// - The header and its rated dimensions are written as one unit
/// - `has_submitted_since` only counts `SUBMITTED` assessments
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Save a new assessment with its rated dimensions.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure (nothing is written)
    async fn save(&self, assessment: &Assessment) -> Result<(), DomainError>;

    /// Update reflection, status and timestamps of an existing assessment.
    ///
    /// # Errors
    ///
    /// - `AssessmentNotFound` if the assessment doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, assessment: &Assessment) -> Result<(), DomainError>;

    /// Find an assessment by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &AssessmentId) -> Result<Option<Assessment>, DomainError>;

    /// All assessments of a user, newest first.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Assessment>, DomainError>;

    /// True if the user has a `SUBMITTED` assessment created at or after `since`.
    async fn has_submitted_since(
        &self,
        user_id: &UserId,
        since: Timestamp,
    ) -> Result<bool, DomainError>;

    /// The user's most recently created `SUBMITTED` assessment.
    async fn find_latest_submitted(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Assessment>, DomainError>;
}
