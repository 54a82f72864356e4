//! Feedback-specific error types.

use thiserror::Error;

use super::FeedbackVersion;
use crate::domain::foundation::{
    CommentTemplateId, DimensionId, DomainError, ErrorCategory, ErrorCode, FeedbackId, UserId,
    ValidationError,
};

/// Feedback-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("Feedback not found: {0}")]
    NotFound(FeedbackId),

    #[error("No feedback exists from manager {manager_id} for developer {developer_id}")]
    NoFeedbackForPair {
        manager_id: UserId,
        developer_id: UserId,
    },

    #[error("Dimension not found: {0}")]
    DimensionNotFound(DimensionId),

    #[error("Comment template not found: {0}")]
    CommentTemplateNotFound(CommentTemplateId),

    #[error("Feedback {feedback_id} already rates dimension {dimension_id}")]
    DuplicateDimension {
        feedback_id: FeedbackId,
        dimension_id: DimensionId,
    },

    #[error("Manager {manager_id} already has version {version} for developer {developer_id}")]
    VersionTaken {
        manager_id: UserId,
        developer_id: UserId,
        version: FeedbackVersion,
    },

    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error(transparent)]
    Infrastructure(DomainError),
}

impl FeedbackError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        FeedbackError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            FeedbackError::NotFound(_) | FeedbackError::NoFeedbackForPair { .. } => {
                ErrorCode::FeedbackNotFound
            }
            FeedbackError::DimensionNotFound(_) => ErrorCode::DimensionNotFound,
            FeedbackError::CommentTemplateNotFound(_) => ErrorCode::CommentTemplateNotFound,
            FeedbackError::DuplicateDimension { .. } => ErrorCode::DuplicateFeedbackDimension,
            FeedbackError::VersionTaken { .. } => ErrorCode::DuplicateFeedbackVersion,
            FeedbackError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            FeedbackError::Infrastructure(err) => err.code,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.code().category()
    }
}

impl From<ValidationError> for FeedbackError {
    fn from(err: ValidationError) -> Self {
        FeedbackError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for FeedbackError {
    fn from(err: DomainError) -> Self {
        FeedbackError::Infrastructure(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_dimension_is_invalid_request() {
        let err = FeedbackError::DuplicateDimension {
            feedback_id: FeedbackId::new(),
            dimension_id: DimensionId::new(),
        };
        assert_eq!(err.category(), ErrorCategory::InvalidRequest);
    }

    #[test]
    fn missing_references_are_not_found() {
        assert_eq!(
            FeedbackError::NotFound(FeedbackId::new()).category(),
            ErrorCategory::NotFound
        );
        assert_eq!(
            FeedbackError::CommentTemplateNotFound(CommentTemplateId::new()).category(),
            ErrorCategory::NotFound
        );
        assert_eq!(
            FeedbackError::NoFeedbackForPair {
                manager_id: UserId::new(),
                developer_id: UserId::new(),
            }
            .category(),
            ErrorCategory::NotFound
        );
    }
}
