//! Assessment query handlers.

use std::sync::Arc;

use crate::domain::assessment::{Assessment, AssessmentError};
use crate::domain::foundation::{AssessmentId, UserId};
use crate::ports::AssessmentRepository;

/// Handler for fetching one assessment.
pub struct GetAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl GetAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, id: AssessmentId) -> Result<Assessment, AssessmentError> {
        self.repository
            .find_by_id(&id)
            .await?
            .ok_or(AssessmentError::NotFound(id))
    }
}

/// Handler for listing a user's assessments, newest first.
pub struct ListUserAssessmentsHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl ListUserAssessmentsHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, user_id: UserId) -> Result<Vec<Assessment>, AssessmentError> {
        Ok(self.repository.find_by_user(&user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAssessmentRepository;
    use crate::domain::assessment::{RatedDimension, SubmissionStatus};
    use crate::domain::foundation::{DimensionId, Rating, Timestamp};

    fn assessment(user: UserId, days_ago: i64) -> Assessment {
        let at = Timestamp::now().minus_days(days_ago);
        Assessment::reconstitute(
            AssessmentId::new(),
            user,
            SubmissionStatus::Draft,
            format!("{} days ago", days_ago),
            vec![RatedDimension::new(DimensionId::new(), Rating::new(2).unwrap())],
            2,
            at,
            at,
        )
    }

    #[tokio::test]
    async fn get_returns_not_found_for_unknown_id() {
        let handler = GetAssessmentHandler::new(Arc::new(InMemoryAssessmentRepository::new()));
        let id = AssessmentId::new();
        assert_eq!(handler.handle(id).await, Err(AssessmentError::NotFound(id)));
    }

    #[tokio::test]
    async fn list_is_newest_first_and_per_user() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let user = UserId::new();
        repo.save(&assessment(user, 90)).await.unwrap();
        repo.save(&assessment(user, 10)).await.unwrap();
        repo.save(&assessment(UserId::new(), 5)).await.unwrap();

        let listed = ListUserAssessmentsHandler::new(repo).handle(user).await.unwrap();

        let reflections: Vec<&str> = listed.iter().map(|a| a.reflection()).collect();
        assert_eq!(reflections, vec!["10 days ago", "90 days ago"]);
    }
}
