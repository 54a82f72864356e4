//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

/// The caller-visible failure classes.
///
/// Every error the core raises lands in exactly one category; callers map
/// categories onto their own surface (HTTP status, CLI exit code, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Malformed or inconsistent input.
    InvalidRequest,
    /// A referenced entity does not exist.
    NotFound,
    /// The request collides with existing state.
    Conflict,
    /// Collaborator or infrastructure failure.
    Internal,
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    InvalidDimensionIds,
    DuplicateFeedbackDimension,
    DuplicateFeedbackVersion,
    InvalidStatusTransition,
    InvalidUserRole,

    // Not found errors
    AssessmentNotFound,
    DimensionNotFound,
    FeedbackNotFound,
    CommentTemplateNotFound,
    UserNotFound,

    // Conflict errors
    ResubmissionTooSoon,

    // Infrastructure errors
    DatabaseError,
    PublishFailed,
    InternalError,
}

impl ErrorCode {
    /// Returns the failure class this code belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorCode::ValidationFailed
            | ErrorCode::InvalidDimensionIds
            | ErrorCode::DuplicateFeedbackDimension
            | ErrorCode::DuplicateFeedbackVersion
            | ErrorCode::InvalidStatusTransition
            | ErrorCode::InvalidUserRole => ErrorCategory::InvalidRequest,
            ErrorCode::AssessmentNotFound
            | ErrorCode::DimensionNotFound
            | ErrorCode::FeedbackNotFound
            | ErrorCode::CommentTemplateNotFound
            | ErrorCode::UserNotFound => ErrorCategory::NotFound,
            ErrorCode::ResubmissionTooSoon => ErrorCategory::Conflict,
            ErrorCode::DatabaseError | ErrorCode::PublishFailed | ErrorCode::InternalError => {
                ErrorCategory::Internal
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidDimensionIds => "INVALID_DIMENSION_IDS",
            ErrorCode::DuplicateFeedbackDimension => "DUPLICATE_FEEDBACK_DIMENSION",
            ErrorCode::DuplicateFeedbackVersion => "DUPLICATE_FEEDBACK_VERSION",
            ErrorCode::InvalidStatusTransition => "INVALID_STATUS_TRANSITION",
            ErrorCode::InvalidUserRole => "INVALID_USER_ROLE",
            ErrorCode::AssessmentNotFound => "ASSESSMENT_NOT_FOUND",
            ErrorCode::DimensionNotFound => "DIMENSION_NOT_FOUND",
            ErrorCode::FeedbackNotFound => "FEEDBACK_NOT_FOUND",
            ErrorCode::CommentTemplateNotFound => "COMMENT_TEMPLATE_NOT_FOUND",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::ResubmissionTooSoon => "RESUBMISSION_TOO_SOON",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::PublishFailed => "PUBLISH_FAILED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
///
/// This is the error type every port returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Returns the failure class of this error.
    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::new(ErrorCode::ValidationFailed, err.to_string())
            .with_detail("field", err.field().to_string())
    }
}
