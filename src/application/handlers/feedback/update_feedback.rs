//! UpdateFeedbackHandler - Command handler for replacing a feedback header.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::{DomainEventEmitter, KeyedLocks, PairKey};
use crate::domain::feedback::{CompleteFeedback, FeedbackError, FeedbackVersion};
use crate::domain::foundation::{EventKind, FeedbackId, Timestamp, UserId};
use crate::ports::FeedbackRepository;

/// Command to overwrite manager, developer and version of a feedback record.
#[derive(Debug, Clone, Copy)]
pub struct UpdateFeedbackCommand {
    pub feedback_id: FeedbackId,
    pub manager_id: UserId,
    pub developer_id: UserId,
    pub version: i32,
}

/// Handler for feedback header updates.
///
/// Dimension and comment entries are not touched; callers replace those
/// through the add-dimension and add-comment handlers first.
///
/// Runs under the lock of the target pair, so a version held by another
/// record of that pair is never written twice.
pub struct UpdateFeedbackHandler {
    repository: Arc<dyn FeedbackRepository>,
    emitter: Arc<DomainEventEmitter>,
    locks: Arc<KeyedLocks<PairKey>>,
}

impl UpdateFeedbackHandler {
    pub fn new(
        repository: Arc<dyn FeedbackRepository>,
        emitter: Arc<DomainEventEmitter>,
        locks: Arc<KeyedLocks<PairKey>>,
    ) -> Self {
        Self {
            repository,
            emitter,
            locks,
        }
    }

    pub async fn handle(&self, cmd: UpdateFeedbackCommand) -> Result<CompleteFeedback, FeedbackError> {
        let version = FeedbackVersion::new(cmd.version)?;

        let pair_lock = self.locks.lock((cmd.manager_id, cmd.developer_id)).await;

        let mut header = self
            .repository
            .find_by_id(&cmd.feedback_id)
            .await?
            .ok_or(FeedbackError::NotFound(cmd.feedback_id))?;

        let taken = self
            .repository
            .find_by_pair(&cmd.manager_id, &cmd.developer_id)
            .await?
            .iter()
            .any(|f| f.id() != cmd.feedback_id && f.version() == version);
        if taken {
            warn!(
                feedback_id = %cmd.feedback_id,
                version = cmd.version,
                "Feedback update rejected, version already used by the pair"
            );
            return Err(FeedbackError::VersionTaken {
                manager_id: cmd.manager_id,
                developer_id: cmd.developer_id,
                version,
            });
        }

        header.reassign(cmd.manager_id, cmd.developer_id, version, Timestamp::now());
        self.repository.update_header(&header).await?;
        drop(pair_lock);

        let updated = self
            .repository
            .find_complete(&cmd.feedback_id)
            .await?
            .ok_or(FeedbackError::NotFound(cmd.feedback_id))?;

        info!(feedback_id = %cmd.feedback_id, version = cmd.version, "Feedback updated");
        self.emitter
            .feedback(EventKind::FeedbackUpdated, updated.header())
            .await;

        Ok(updated)
    }
}
