//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, error types and the event
//! infrastructure that form the vocabulary of the assessment domain.

mod errors;
mod events;
mod ids;
mod rating;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCategory, ErrorCode, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventKind, EVENT_SOURCE,
};
pub use ids::{
    AssessmentId, CommentTemplateId, DimensionId, FeedbackCommentId, FeedbackDimensionId,
    FeedbackId, UserId,
};
pub use rating::Rating;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
