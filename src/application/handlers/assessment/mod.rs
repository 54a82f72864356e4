//! Assessment handlers.

mod create_assessment;
mod get_assessment;
mod scoring_engine;
mod submission_guard;
mod update_assessment;

pub use create_assessment::{CreateAssessmentCommand, CreateAssessmentHandler};
pub use get_assessment::{GetAssessmentHandler, ListUserAssessmentsHandler};
pub use scoring_engine::ScoringEngine;
pub use submission_guard::SubmissionGuard;
pub use update_assessment::{UpdateAssessmentCommand, UpdateAssessmentHandler};
