//! Standalone dimension and comment entry handlers.
//!
//! These let callers replace a feedback record's entries piece by piece
//! before updating its header.

use std::sync::Arc;

use tracing::debug;

use crate::domain::feedback::{
    FeedbackCommentEntry, FeedbackCommentInput, FeedbackDimensionEntry, FeedbackDimensionInput,
    FeedbackError,
};
use crate::domain::foundation::{ErrorCode, FeedbackId, Timestamp};
use crate::ports::{CommentTemplateRepository, DimensionCatalog, FeedbackRepository};

/// Handler that adds one rated dimension to existing feedback.
pub struct AddFeedbackDimensionHandler {
    repository: Arc<dyn FeedbackRepository>,
    catalog: Arc<dyn DimensionCatalog>,
}

impl AddFeedbackDimensionHandler {
    pub fn new(repository: Arc<dyn FeedbackRepository>, catalog: Arc<dyn DimensionCatalog>) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    pub async fn handle(
        &self,
        feedback_id: FeedbackId,
        input: FeedbackDimensionInput,
    ) -> Result<FeedbackDimensionEntry, FeedbackError> {
        if self.repository.find_by_id(&feedback_id).await?.is_none() {
            return Err(FeedbackError::NotFound(feedback_id));
        }
        if self.catalog.find_by_id(&input.dimension_id).await?.is_none() {
            return Err(FeedbackError::DimensionNotFound(input.dimension_id));
        }
        if self
            .repository
            .dimension_exists(&feedback_id, &input.dimension_id)
            .await?
        {
            return Err(FeedbackError::DuplicateDimension {
                feedback_id,
                dimension_id: input.dimension_id,
            });
        }

        let entry = FeedbackDimensionEntry::new(feedback_id, input, Timestamp::now());
        self.repository
            .add_dimension(&entry)
            .await
            .map_err(|err| match err.code {
                ErrorCode::DuplicateFeedbackDimension => FeedbackError::DuplicateDimension {
                    feedback_id,
                    dimension_id: entry.dimension_id,
                },
                ErrorCode::FeedbackNotFound => FeedbackError::NotFound(feedback_id),
                _ => FeedbackError::from(err),
            })?;
        debug!(feedback_id = %feedback_id, dimension_id = %entry.dimension_id, "Feedback dimension added");
        Ok(entry)
    }
}

/// Handler that adds one template answer to existing feedback.
pub struct AddFeedbackCommentHandler {
    repository: Arc<dyn FeedbackRepository>,
    templates: Arc<dyn CommentTemplateRepository>,
}

impl AddFeedbackCommentHandler {
    pub fn new(
        repository: Arc<dyn FeedbackRepository>,
        templates: Arc<dyn CommentTemplateRepository>,
    ) -> Self {
        Self {
            repository,
            templates,
        }
    }

    pub async fn handle(
        &self,
        feedback_id: FeedbackId,
        input: FeedbackCommentInput,
    ) -> Result<FeedbackCommentEntry, FeedbackError> {
        if self.repository.find_by_id(&feedback_id).await?.is_none() {
            return Err(FeedbackError::NotFound(feedback_id));
        }
        if self.templates.find_by_id(&input.template_id).await?.is_none() {
            return Err(FeedbackError::CommentTemplateNotFound(input.template_id));
        }

        let entry = FeedbackCommentEntry::new(feedback_id, input);
        self.repository.add_comment(&entry).await?;
        debug!(feedback_id = %feedback_id, template_id = %entry.template_id, "Feedback comment added");
        Ok(entry)
    }
}
