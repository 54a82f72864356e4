//! Assessment domain module.
//!
//! Self-assessments, their submission state machine and the 30-day
//! resubmission window.
//!
//! # Events
//!
//! - `AssessmentSubmitted` - Published when a new assessment is persisted
//! - `AssessmentUpdated` - Published when reflection or status changes

mod aggregate;
mod errors;
mod events;
mod status;
mod window;

pub use aggregate::{validate_ratings, validate_reflection, Assessment, RatedDimension};
pub use errors::AssessmentError;
pub use events::AssessmentEvent;
pub use status::SubmissionStatus;
pub use window::{blocks_resubmission, resubmission_window_start, RESUBMISSION_WINDOW_DAYS};
