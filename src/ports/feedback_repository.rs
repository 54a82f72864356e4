//! Feedback repository port.
//!
//! Persists feedback headers and their dimension and comment entries.

use async_trait::async_trait;

use crate::domain::feedback::{
    CompleteFeedback, Feedback, FeedbackCommentEntry, FeedbackDimensionEntry,
    FeedbackSearchCriteria, FeedbackVersion,
};
use crate::domain::foundation::{DimensionId, DomainError, FeedbackId, UserId};

/// Repository port for Feedback aggregate persistence.
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Highest version stored for the (manager, developer) pair.
    ///
    /// Returns `None` when the pair has no feedback.
    async fn max_version_for(
        &self,
        manager_id: &UserId,
        developer_id: &UserId,
    ) -> Result<Option<FeedbackVersion>, DomainError>;

    /// Save a header with no entries.
    async fn save_header(&self, feedback: &Feedback) -> Result<(), DomainError>;

    /// Save a header and every entry as one unit.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure (nothing is written)
    async fn save_complete(&self, feedback: &CompleteFeedback) -> Result<(), DomainError>;

    /// Replace an existing header. Entries are left alone.
    ///
    /// # Errors
    ///
    /// - `FeedbackNotFound` if the feedback doesn't exist
    async fn update_header(&self, feedback: &Feedback) -> Result<(), DomainError>;

    /// Find a header by ID.
    async fn find_by_id(&self, id: &FeedbackId) -> Result<Option<Feedback>, DomainError>;

    /// Find a header with all of its entries, in insertion order.
    async fn find_complete(&self, id: &FeedbackId) -> Result<Option<CompleteFeedback>, DomainError>;

    /// All headers for the pair, highest version first.
    async fn find_by_pair(
        &self,
        manager_id: &UserId,
        developer_id: &UserId,
    ) -> Result<Vec<Feedback>, DomainError>;

    /// All headers written by a manager, newest first.
    async fn find_by_manager(&self, manager_id: &UserId) -> Result<Vec<Feedback>, DomainError>;

    /// All headers about a developer, newest first.
    async fn find_by_developer(&self, developer_id: &UserId) -> Result<Vec<Feedback>, DomainError>;

    /// Headers matching every set field of the criteria, newest first.
    async fn search(&self, criteria: &FeedbackSearchCriteria) -> Result<Vec<Feedback>, DomainError>;

    /// True if the feedback already has an entry for the dimension.
    async fn dimension_exists(
        &self,
        feedback_id: &FeedbackId,
        dimension_id: &DimensionId,
    ) -> Result<bool, DomainError>;

    /// Append a dimension entry to an existing feedback.
    ///
    /// # Errors
    ///
    /// - `FeedbackNotFound` if the feedback doesn't exist
    /// - `DuplicateFeedbackDimension` if the feedback already rates the dimension
    async fn add_dimension(&self, entry: &FeedbackDimensionEntry) -> Result<(), DomainError>;

    /// Append a comment entry to an existing feedback.
    async fn add_comment(&self, entry: &FeedbackCommentEntry) -> Result<(), DomainError>;

    /// Delete a feedback and its entries.
    ///
    /// # Errors
    ///
    /// - `FeedbackNotFound` if the feedback doesn't exist
    async fn delete(&self, id: &FeedbackId) -> Result<(), DomainError>;
}
