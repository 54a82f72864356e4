//! User domain module.
//!
//! The assessment service does not own users. It keeps a snapshot of each
//! user's identity, fed by identity-service events, and resolves that
//! snapshot into a `UserContext` whenever an outbound event needs one.

mod context;
mod errors;
mod role;
mod snapshot;

pub use context::{UserContext, UNKNOWN_EMAIL, UNKNOWN_FULL_NAME, UNKNOWN_USERNAME};
pub use errors::UserError;
pub use role::UserRole;
pub use snapshot::{UserEvent, UserEventData, UserSnapshot};
