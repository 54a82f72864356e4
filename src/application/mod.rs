//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Writes are followed by best-effort event emission through
//! `DomainEventEmitter`; check-then-write sequences run under `KeyedLocks`.

mod event_emitter;
pub mod handlers;
mod keyed_locks;
mod services;

pub use event_emitter::DomainEventEmitter;
pub use keyed_locks::{KeyGuard, KeyedLocks, PairKey};
pub use services::AssessmentServices;

pub use handlers::{
    // Assessment
    CreateAssessmentCommand, CreateAssessmentHandler, GetAssessmentHandler,
    ListUserAssessmentsHandler, ScoringEngine, SubmissionGuard, UpdateAssessmentCommand,
    UpdateAssessmentHandler,
    // Feedback
    AddFeedbackCommentHandler, AddFeedbackDimensionHandler, CreateCompleteFeedbackCommand,
    CreateCompleteFeedbackHandler, CreateFeedbackVersionCommand, CreateFeedbackVersionHandler,
    DeleteFeedbackHandler, FeedbackQueryHandler, GetFeedbackHandler, PairFeedbackHandler,
    UpdateFeedbackCommand, UpdateFeedbackHandler,
    // Analysis
    AnalysisPayloadBuilder,
    // Users
    ApplyUserEventHandler, AssignDeveloperCommand, AssignDeveloperHandler, UserSyncOutcome,
};
