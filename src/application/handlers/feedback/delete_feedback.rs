//! DeleteFeedbackHandler - removes a feedback record and its entries.

use std::sync::Arc;

use tracing::info;

use crate::application::DomainEventEmitter;
use crate::domain::feedback::FeedbackError;
use crate::domain::foundation::{EventKind, FeedbackId};
use crate::ports::FeedbackRepository;

pub struct DeleteFeedbackHandler {
    repository: Arc<dyn FeedbackRepository>,
    emitter: Arc<DomainEventEmitter>,
}

impl DeleteFeedbackHandler {
    pub fn new(repository: Arc<dyn FeedbackRepository>, emitter: Arc<DomainEventEmitter>) -> Self {
        Self {
            repository,
            emitter,
        }
    }

    pub async fn handle(&self, feedback_id: FeedbackId) -> Result<(), FeedbackError> {
        let header = self
            .repository
            .find_by_id(&feedback_id)
            .await?
            .ok_or(FeedbackError::NotFound(feedback_id))?;

        self.repository.delete(&feedback_id).await?;
        info!(feedback_id = %feedback_id, "Feedback deleted");

        self.emitter.feedback(EventKind::FeedbackDeleted, &header).await;
        Ok(())
    }
}
