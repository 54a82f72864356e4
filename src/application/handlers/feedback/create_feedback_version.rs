//! CreateFeedbackVersionHandler - starts a new, empty feedback cycle for a pair.

use std::sync::Arc;

use tracing::info;

use crate::application::{DomainEventEmitter, KeyedLocks, PairKey};
use crate::domain::feedback::{Feedback, FeedbackError, FeedbackVersion};
use crate::domain::foundation::{EventKind, FeedbackId, Timestamp, UserId};
use crate::ports::FeedbackRepository;

/// Command to allocate the next feedback version for a pair.
#[derive(Debug, Clone, Copy)]
pub struct CreateFeedbackVersionCommand {
    pub manager_id: UserId,
    pub developer_id: UserId,
}

/// Handler that persists an empty header with the next version.
pub struct CreateFeedbackVersionHandler {
    repository: Arc<dyn FeedbackRepository>,
    emitter: Arc<DomainEventEmitter>,
    locks: Arc<KeyedLocks<PairKey>>,
}

impl CreateFeedbackVersionHandler {
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

    pub async fn handle(&self, cmd: CreateFeedbackVersionCommand) -> Result<Feedback, FeedbackError> {
        let pair_lock = self.locks.lock((cmd.manager_id, cmd.developer_id)).await;

        let current = self
            .repository
            .max_version_for(&cmd.manager_id, &cmd.developer_id)
            .await?;
        let feedback = Feedback::new(
            FeedbackId::new(),
            cmd.manager_id,
            cmd.developer_id,
            FeedbackVersion::after(current),
            Timestamp::now(),
        );
        self.repository.save_header(&feedback).await?;
        drop(pair_lock);

        info!(
            feedback_id = %feedback.id(),
            version = feedback.version().value(),
            "Feedback version created"
        );
        self.emitter
            .feedback(EventKind::FeedbackVersionCreated, &feedback)
            .await;

        Ok(feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Harness;
    use crate::domain::user::{UserRole, UserSnapshot};
    use crate::ports::UserDirectory;

    #[tokio::test]
    async fn allocates_sequential_empty_versions() {
        let h = Harness::seeded().await;
        let handler = CreateFeedbackVersionHandler::new(h.feedback.clone(), h.emitter.clone(), h.pair_locks.clone());
        let cmd = CreateFeedbackVersionCommand {
            manager_id: UserId::new(),
            developer_id: UserId::new(),
        };

        let first = handler.handle(cmd).await.unwrap();
        let second = handler.handle(cmd).await.unwrap();

        assert_eq!(first.version(), FeedbackVersion::FIRST);
        assert_eq!(second.version().value(), 2);

        let complete = h.feedback.find_complete(&second.id()).await.unwrap().unwrap();
        assert!(complete.dimensions().is_empty());
        assert!(complete.comments().is_empty());

        let events = h.bus.events_of_kind(EventKind::FeedbackVersionCreated);
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].payload["feedbackVersion"], 2);
    }

    #[tokio::test]
    async fn version_event_names_both_synced_users() {
        let h = Harness::seeded().await;
        let (manager, developer) = (UserId::new(), UserId::new());
        h.users
            .upsert(&UserSnapshot::new(manager, None, "Ana Lead", "ana", "ana@example.com", UserRole::Manager))
            .await
            .unwrap();
        h.users
            .upsert(&UserSnapshot::new(
                developer,
                Some(manager),
                "Ben Coder",
                "ben",
                "ben@example.com",
                UserRole::Developer,
            ))
            .await
            .unwrap();
        let handler = CreateFeedbackVersionHandler::new(h.feedback.clone(), h.emitter.clone(), h.pair_locks.clone());

        handler
            .handle(CreateFeedbackVersionCommand {
                manager_id: manager,
                developer_id: developer,
            })
            .await
            .unwrap();

        let event = &h.bus.events_of_kind(EventKind::FeedbackVersionCreated)[0];
        assert_eq!(event.payload["managerContext"]["fullName"], "Ana Lead");
        assert_eq!(event.payload["developerContext"]["fullName"], "Ben Coder");
        assert_eq!(event.payload["developerContext"]["managerId"], manager.to_string());
    }
}
