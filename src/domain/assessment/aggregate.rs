//! Assessment aggregate entity.
//!
//! A self-assessment: one user's ratings against catalog dimensions plus a
//! free-text reflection. The average score is derived from the ratings when
//! the assessment is created and is never changed afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::SubmissionStatus;
use crate::domain::foundation::{
    AssessmentId, DimensionId, Rating, StateMachine, Timestamp, UserId, ValidationError,
};

/// A rating given against one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatedDimension {
    pub dimension_id: DimensionId,
    pub rating: Rating,
}

impl RatedDimension {
    pub fn new(dimension_id: DimensionId, rating: Rating) -> Self {
        Self {
            dimension_id,
            rating,
        }
    }
}

/// Checks a caller-supplied rating list before any catalog lookups.
///
/// # Errors
///
/// - `EmptyField` when the list is empty
/// - `InvalidFormat` when a dimension is rated twice
pub fn validate_ratings(ratings: &[RatedDimension]) -> Result<(), ValidationError> {
    if ratings.is_empty() {
        return Err(ValidationError::empty_field("dimensions"));
    }
    let mut seen = HashSet::with_capacity(ratings.len());
    for rated in ratings {
        if !seen.insert(rated.dimension_id) {
            return Err(ValidationError::invalid_format(
                "dimensions",
                format!("dimension {} is rated more than once", rated.dimension_id),
            ));
        }
    }
    Ok(())
}

/// Checks that a reflection carries text.
pub fn validate_reflection(reflection: &str) -> Result<(), ValidationError> {
    if reflection.trim().is_empty() {
        return Err(ValidationError::empty_field("reflection"));
    }
    Ok(())
}

/// Assessment aggregate.
///
/// # Invariants
///
/// - `reflection` is non-blank
/// - `dimensions` is non-empty with no repeated dimension
/// - `average_score` was computed from `dimensions` at creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    id: AssessmentId,
    user_id: UserId,
    status: SubmissionStatus,
    reflection: String,
    dimensions: Vec<RatedDimension>,
    average_score: i32,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Assessment {
    /// Creates a scored assessment.
    ///
    /// `average_score` must come from the scoring engine run over `dimensions`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the reflection is blank or the rating list
    /// is empty or repeats a dimension.
    pub fn scored(
        id: AssessmentId,
        user_id: UserId,
        reflection: impl Into<String>,
        status: SubmissionStatus,
        dimensions: Vec<RatedDimension>,
        average_score: i32,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        let reflection = reflection.into();
        validate_reflection(&reflection)?;
        validate_ratings(&dimensions)?;

        Ok(Self {
            id,
            user_id,
            status,
            reflection,
            dimensions,
            average_score,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute an assessment from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: AssessmentId,
        user_id: UserId,
        status: SubmissionStatus,
        reflection: String,
        dimensions: Vec<RatedDimension>,
        average_score: i32,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            status,
            reflection,
            dimensions,
            average_score,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> AssessmentId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn reflection(&self) -> &str {
        &self.reflection
    }

    pub fn dimensions(&self) -> &[RatedDimension] {
        &self.dimensions
    }

    pub fn average_score(&self) -> i32 {
        self.average_score
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    pub fn is_submitted(&self) -> bool {
        self.status.is_submitted()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces the reflection text.
    pub fn replace_reflection(
        &mut self,
        reflection: impl Into<String>,
        now: Timestamp,
    ) -> Result<(), ValidationError> {
        let reflection = reflection.into();
        validate_reflection(&reflection)?;
        self.reflection = reflection;
        self.updated_at = now;
        Ok(())
    }

    /// Moves the assessment to `target`.
    ///
    /// Setting the current status again is a no-op and returns `Ok(false)`.
    pub fn change_status(
        &mut self,
        target: SubmissionStatus,
        now: Timestamp,
    ) -> Result<bool, ValidationError> {
        if self.status == target {
            return Ok(false);
        }
        self.status = self.status.transition_to(target)?;
        self.updated_at = now;
        Ok(true)
    }
}
