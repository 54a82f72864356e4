//! User snapshot handlers.

mod apply_user_event;
mod assign_developer;

pub use apply_user_event::{ApplyUserEventHandler, UserSyncOutcome};
pub use assign_developer::{AssignDeveloperCommand, AssignDeveloperHandler};
