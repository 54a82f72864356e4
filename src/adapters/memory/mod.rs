//! In-memory adapters.
//!
//! Implement every persistence and lookup port in process. Used by the test
//! suites and the development binary; nothing survives a restart.

mod assessment_repository;
mod comment_templates;
mod dimension_catalog;
mod feedback_repository;
mod seed;
mod user_directory;

pub use assessment_repository::InMemoryAssessmentRepository;
pub use comment_templates::InMemoryCommentTemplates;
pub use dimension_catalog::InMemoryDimensionCatalog;
pub use feedback_repository::InMemoryFeedbackRepository;
pub use seed::{default_dimensions, default_templates, seed_defaults, SeedReport};
pub use user_directory::InMemoryUserDirectory;
