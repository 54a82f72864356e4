//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod analysis;
pub mod assessment;
pub mod feedback;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

pub use analysis::AnalysisPayloadBuilder;
pub use assessment::{
    CreateAssessmentCommand, CreateAssessmentHandler, GetAssessmentHandler,
    ListUserAssessmentsHandler, ScoringEngine, SubmissionGuard, UpdateAssessmentCommand,
    UpdateAssessmentHandler,
};
pub use feedback::{
    AddFeedbackCommentHandler, AddFeedbackDimensionHandler, CreateCompleteFeedbackCommand,
    CreateCompleteFeedbackHandler, CreateFeedbackVersionCommand, CreateFeedbackVersionHandler,
    DeleteFeedbackHandler, FeedbackQueryHandler, GetFeedbackHandler, PairFeedbackHandler,
    UpdateFeedbackCommand, UpdateFeedbackHandler,
};
pub use user::{
    ApplyUserEventHandler, AssignDeveloperCommand, AssignDeveloperHandler, UserSyncOutcome,
};
