//! In-memory assessment repository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::assessment::Assessment;
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::AssessmentRepository;

/// In-memory implementation of the AssessmentRepository port.
///
/// An assessment is stored as one value, so its header and rated dimensions
/// are always written together.
#[derive(Default)]
pub struct InMemoryAssessmentRepository {
    assessments: RwLock<HashMap<AssessmentId, Assessment>>,
}

impl InMemoryAssessmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.assessments.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.assessments.read().await.is_empty()
    }

    /// Number of submitted assessments stored for a user.
    pub async fn submitted_count(&self, user_id: &UserId) -> usize {
        self.assessments
            .read()
            .await
            .values()
            .filter(|a| a.user_id() == *user_id && a.is_submitted())
            .count()
    }
}

#[async_trait]
impl AssessmentRepository for InMemoryAssessmentRepository {
    async fn save(&self, assessment: &Assessment) -> Result<(), DomainError> {
        self.assessments
            .write()
            .await
            .insert(assessment.id(), assessment.clone());
        Ok(())
    }

    async fn update(&self, assessment: &Assessment) -> Result<(), DomainError> {
        let mut assessments = self.assessments.write().await;
        match assessments.get_mut(&assessment.id()) {
            Some(stored) => {
                *stored = assessment.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::AssessmentNotFound,
                format!("Assessment not found: {}", assessment.id()),
            )),
        }
    }

    async fn find_by_id(&self, id: &AssessmentId) -> Result<Option<Assessment>, DomainError> {
        Ok(self.assessments.read().await.get(id).cloned())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Assessment>, DomainError> {
        let mut found: Vec<Assessment> = self
            .assessments
            .read()
            .await
            .values()
            .filter(|a| a.user_id() == *user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(found)
    }

    async fn has_submitted_since(
        &self,
        user_id: &UserId,
        since: Timestamp,
    ) -> Result<bool, DomainError> {
        Ok(self
            .assessments
            .read()
            .await
            .values()
            .any(|a| a.user_id() == *user_id && a.is_submitted() && a.created_at() >= since))
    }

    async fn find_latest_submitted(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Assessment>, DomainError> {
        Ok(self
            .assessments
            .read()
            .await
            .values()
            .filter(|a| a.user_id() == *user_id && a.is_submitted())
            .max_by_key(|a| a.created_at())
            .cloned())
    }
}
