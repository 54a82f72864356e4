//! Assessment-specific error types.

use thiserror::Error;

use super::SubmissionStatus;
use crate::domain::foundation::{
    AssessmentId, DimensionId, DomainError, ErrorCategory, ErrorCode, UserId, ValidationError,
};

/// Assessment-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    #[error("Assessment not found: {0}")]
    NotFound(AssessmentId),

    #[error("One or more dimension ids are invalid")]
    InvalidDimensionIds,

    #[error("Dimension not found: {0}")]
    DimensionNotFound(DimensionId),

    #[error("User {0} already submitted an assessment within the last 30 days")]
    ResubmissionTooSoon(UserId),

    #[error("Cannot change status from {from} to {to}")]
    InvalidStatusTransition {
        from: SubmissionStatus,
        to: SubmissionStatus,
    },

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error(transparent)]
    Infrastructure(DomainError),
}

impl AssessmentError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AssessmentError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::NotFound(_) => ErrorCode::AssessmentNotFound,
            AssessmentError::InvalidDimensionIds => ErrorCode::InvalidDimensionIds,
            AssessmentError::DimensionNotFound(_) => ErrorCode::DimensionNotFound,
            AssessmentError::ResubmissionTooSoon(_) => ErrorCode::ResubmissionTooSoon,
            AssessmentError::InvalidStatusTransition { .. } => ErrorCode::InvalidStatusTransition,
            AssessmentError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            AssessmentError::Infrastructure(err) => err.code,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.code().category()
    }
}

impl From<ValidationError> for AssessmentError {
    fn from(err: ValidationError) -> Self {
        AssessmentError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for AssessmentError {
    fn from(err: DomainError) -> Self {
        AssessmentError::Infrastructure(err)
    }
}
