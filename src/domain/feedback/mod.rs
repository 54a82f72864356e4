//! Feedback domain module.
//!
//! Versioned manager feedback for a developer: per-dimension ratings plus
//! answers to comment templates.
//!
//! # Events
//!
//! - `FeedbackCreated` - Published when complete feedback is persisted
//! - `FeedbackUpdated` - Published when a header is replaced
//! - `FeedbackDeleted` - Published when a record is removed
//! - `FeedbackVersionCreated` - Published when an empty version is opened

mod aggregate;
mod criteria;
mod errors;
mod events;
mod template;
mod version;

pub use aggregate::{
    CompleteFeedback, Feedback, FeedbackCommentEntry, FeedbackCommentInput, FeedbackDimensionEntry,
    FeedbackDimensionInput,
};
pub use criteria::FeedbackSearchCriteria;
pub use errors::FeedbackError;
pub use events::FeedbackEvent;
pub use template::CommentTemplate;
pub use version::FeedbackVersion;
