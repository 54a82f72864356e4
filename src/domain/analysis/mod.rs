//! Analysis Module - reconciliation of self-assessment and manager feedback.
//!
//! # Components
//!
//! - `AnalysisPayload` - Derived comparison payload (never persisted)
//! - `FeedbackReconciler` - Pure join over pre-fetched assessment and feedback data
//! - `AnalysisSubmitted` - Event carrying the payload to the analysis consumer

mod events;
mod payload;
mod reconciler;

pub use events::AnalysisSubmitted;
pub use payload::{AnalysisPayload, ScoreMap, ScoreSection};
pub use reconciler::{
    FeedbackReconciler, ManagerFeedbackView, ScoredDimension, SelfAssessmentView, TitledComment,
    COMMENT_SEPARATOR,
};
