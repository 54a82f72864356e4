//! Feedback query handlers.

use std::sync::Arc;

use crate::domain::feedback::{CompleteFeedback, Feedback, FeedbackError, FeedbackSearchCriteria};
use crate::domain::foundation::{FeedbackId, UserId};
use crate::ports::FeedbackRepository;

/// Handler for fetching one feedback record by id.
pub struct GetFeedbackHandler {
    repository: Arc<dyn FeedbackRepository>,
}

impl GetFeedbackHandler {
    pub fn new(repository: Arc<dyn FeedbackRepository>) -> Self {
        Self { repository }
    }

    /// Header only.
    pub async fn header(&self, id: FeedbackId) -> Result<Feedback, FeedbackError> {
        self.repository
            .find_by_id(&id)
            .await?
            .ok_or(FeedbackError::NotFound(id))
    }

    /// Header with every dimension and comment entry.
    pub async fn complete(&self, id: FeedbackId) -> Result<CompleteFeedback, FeedbackError> {
        self.repository
            .find_complete(&id)
            .await?
            .ok_or(FeedbackError::NotFound(id))
    }
}

/// Handler for the feedback history of one (manager, developer) pair.
pub struct PairFeedbackHandler {
    repository: Arc<dyn FeedbackRepository>,
}

impl PairFeedbackHandler {
    pub fn new(repository: Arc<dyn FeedbackRepository>) -> Self {
        Self { repository }
    }

    /// All headers for the pair, highest version first.
    pub async fn list(&self, manager_id: UserId, developer_id: UserId) -> Result<Vec<Feedback>, FeedbackError> {
        Ok(self.repository.find_by_pair(&manager_id, &developer_id).await?)
    }

    /// The highest version for the pair, with its entries.
    pub async fn latest(&self, manager_id: UserId, developer_id: UserId) -> Result<CompleteFeedback, FeedbackError> {
        let not_found = || FeedbackError::NoFeedbackForPair {
            manager_id,
            developer_id,
        };

        let latest = self
            .repository
            .find_by_pair(&manager_id, &developer_id)
            .await?
            .into_iter()
            .next()
            .ok_or_else(not_found)?;

        self.repository
            .find_complete(&latest.id())
            .await?
            .ok_or_else(not_found)
    }
}

/// Handler for feedback listings across pairs.
pub struct FeedbackQueryHandler {
    repository: Arc<dyn FeedbackRepository>,
}

impl FeedbackQueryHandler {
    pub fn new(repository: Arc<dyn FeedbackRepository>) -> Self {
        Self { repository }
    }

    pub async fn by_manager(&self, manager_id: UserId) -> Result<Vec<Feedback>, FeedbackError> {
        Ok(self.repository.find_by_manager(&manager_id).await?)
    }

    pub async fn by_developer(&self, developer_id: UserId) -> Result<Vec<Feedback>, FeedbackError> {
        Ok(self.repository.find_by_developer(&developer_id).await?)
    }

    /// Headers matching every field set on the criteria, newest first.
    ///
    /// A range whose start is after its end is rejected rather than
    /// answered with an empty list.
    pub async fn search(&self, criteria: FeedbackSearchCriteria) -> Result<Vec<Feedback>, FeedbackError> {
        if let (Some(after), Some(before)) = (criteria.created_after, criteria.created_before) {
            if after > before {
                return Err(FeedbackError::validation(
                    "created_after",
                    "must not be later than created_before",
                ));
            }
        }
        Ok(self.repository.search(&criteria).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryFeedbackRepository;
    use crate::domain::feedback::FeedbackVersion;
    use crate::domain::foundation::{ErrorCategory, Timestamp};

    async fn repo_with_versions(manager: UserId, developer: UserId, versions: &[i32]) -> Arc<InMemoryFeedbackRepository> {
        let repo = Arc::new(InMemoryFeedbackRepository::new());
        for v in versions {
            let header = Feedback::new(
                FeedbackId::new(),
                manager,
                developer,
                FeedbackVersion::new(*v).unwrap(),
                Timestamp::now(),
            );
            repo.save_header(&header).await.unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn list_is_version_descending() {
        let (manager, developer) = (UserId::new(), UserId::new());
        let repo = repo_with_versions(manager, developer, &[1, 3, 2]).await;

        let listed = PairFeedbackHandler::new(repo).list(manager, developer).await.unwrap();

        let versions: Vec<i32> = listed.iter().map(|f| f.version().value()).collect();
        assert_eq!(versions, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn latest_returns_highest_version() {
        let (manager, developer) = (UserId::new(), UserId::new());
        let repo = repo_with_versions(manager, developer, &[1, 2]).await;

        let latest = PairFeedbackHandler::new(repo).latest(manager, developer).await.unwrap();

        assert_eq!(latest.header().version().value(), 2);
    }

    #[tokio::test]
    async fn latest_for_empty_pair_is_not_found() {
        let repo = Arc::new(InMemoryFeedbackRepository::new());
        let (manager, developer) = (UserId::new(), UserId::new());

        let err = PairFeedbackHandler::new(repo).latest(manager, developer).await.unwrap_err();

        assert_eq!(err, FeedbackError::NoFeedbackForPair { manager_id: manager, developer_id: developer });
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[tokio::test]
    async fn queries_by_manager_developer_and_criteria() {
        let (manager, developer) = (UserId::new(), UserId::new());
        let repo = repo_with_versions(manager, developer, &[1, 2]).await;
        let other_manager = UserId::new();
        repo.save_header(&Feedback::new(
            FeedbackId::new(),
            other_manager,
            developer,
            FeedbackVersion::FIRST,
            Timestamp::now(),
        ))
        .await
        .unwrap();
        let handler = FeedbackQueryHandler::new(repo);

        assert_eq!(handler.by_manager(manager).await.unwrap().len(), 2);
        assert_eq!(handler.by_developer(developer).await.unwrap().len(), 3);

        let first_versions = handler
            .search(FeedbackSearchCriteria {
                developer_id: Some(developer),
                feedback_version: Some(FeedbackVersion::FIRST),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(first_versions.len(), 2);
        assert!(first_versions.iter().all(|f| f.version() == FeedbackVersion::FIRST));
    }

    #[tokio::test]
    async fn search_rejects_inverted_date_range() {
        let handler = FeedbackQueryHandler::new(Arc::new(InMemoryFeedbackRepository::new()));
        let now = Timestamp::now();

        let err = handler
            .search(FeedbackSearchCriteria {
                created_after: Some(now),
                created_before: Some(now.minus_days(1)),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert_eq!(err.category(), ErrorCategory::InvalidRequest);
    }

    #[tokio::test]
    async fn get_distinguishes_missing_records() {
        let repo = Arc::new(InMemoryFeedbackRepository::new());
        let handler = GetFeedbackHandler::new(repo);
        let id = FeedbackId::new();

        assert_eq!(handler.header(id).await, Err(FeedbackError::NotFound(id)));
        assert_eq!(handler.complete(id).await, Err(FeedbackError::NotFound(id)));
    }
}
