//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Read-side collaborators
//!
//! - `DimensionCatalog` - Weighted dimension definitions
//! - `CommentTemplateRepository` - Titled comment prompts
//! - `UserDirectory` - Identity snapshots for event enrichment
//!
//! ## Persistence
//!
//! - `AssessmentRepository` - Assessments with their rated dimensions
//! - `FeedbackRepository` - Feedback headers, dimension and comment entries
//!
//! ## Events
//!
//! - `EventPublisher` - Outbound domain events

mod assessment_repository;
mod comment_template_repository;
mod dimension_catalog;
mod event_publisher;
mod feedback_repository;
mod user_directory;

pub use assessment_repository::AssessmentRepository;
pub use comment_template_repository::CommentTemplateRepository;
pub use dimension_catalog::DimensionCatalog;
pub use event_publisher::EventPublisher;
pub use feedback_repository::FeedbackRepository;
pub use user_directory::UserDirectory;
