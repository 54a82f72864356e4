//! Feedback handlers.

mod add_feedback_entry;
mod create_complete_feedback;
mod create_feedback_version;
mod delete_feedback;
mod get_feedback;
mod update_feedback;

pub use add_feedback_entry::{AddFeedbackCommentHandler, AddFeedbackDimensionHandler};
pub use create_complete_feedback::{CreateCompleteFeedbackCommand, CreateCompleteFeedbackHandler};
pub use create_feedback_version::{CreateFeedbackVersionCommand, CreateFeedbackVersionHandler};
pub use delete_feedback::DeleteFeedbackHandler;
pub use get_feedback::{FeedbackQueryHandler, GetFeedbackHandler, PairFeedbackHandler};
pub use update_feedback::{UpdateFeedbackCommand, UpdateFeedbackHandler};
