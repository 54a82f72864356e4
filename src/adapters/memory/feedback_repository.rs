//! In-memory feedback repository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::feedback::{
    CompleteFeedback, Feedback, FeedbackCommentEntry, FeedbackDimensionEntry,
    FeedbackSearchCriteria, FeedbackVersion,
};
use crate::domain::foundation::{DimensionId, DomainError, ErrorCode, FeedbackId, UserId};
use crate::ports::FeedbackRepository;

#[derive(Default)]
struct FeedbackTables {
    headers: HashMap<FeedbackId, Feedback>,
    dimensions: Vec<FeedbackDimensionEntry>,
    comments: Vec<FeedbackCommentEntry>,
}

impl FeedbackTables {
    /// Matching headers, newest first.
    fn select(&self, criteria: &FeedbackSearchCriteria) -> Vec<Feedback> {
        let mut found: Vec<Feedback> = self
            .headers
            .values()
            .filter(|f| criteria.matches(f))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        found
    }

    fn require(&self, id: &FeedbackId) -> Result<(), DomainError> {
        if self.headers.contains_key(id) {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}

fn not_found(id: &FeedbackId) -> DomainError {
    DomainError::new(ErrorCode::FeedbackNotFound, format!("Feedback not found: {}", id))
}

/// In-memory implementation of the FeedbackRepository port.
///
/// All three tables sit behind one lock, so a complete feedback is written
/// in a single critical section.
#[derive(Default)]
pub struct InMemoryFeedbackRepository {
    tables: RwLock<FeedbackTables>,
}

impl InMemoryFeedbackRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn header_count(&self) -> usize {
        self.tables.read().await.headers.len()
    }

    /// Versions stored for a pair, ascending. Repeats show up as duplicates.
    pub async fn versions_for(&self, manager_id: &UserId, developer_id: &UserId) -> Vec<i32> {
        let tables = self.tables.read().await;
        let mut versions: Vec<i32> = tables
            .headers
            .values()
            .filter(|f| f.manager_id() == *manager_id && f.developer_id() == *developer_id)
            .map(|f| f.version().value())
            .collect();
        versions.sort_unstable();
        versions
    }
}

#[async_trait]
impl FeedbackRepository for InMemoryFeedbackRepository {
    async fn max_version_for(
        &self,
        manager_id: &UserId,
        developer_id: &UserId,
    ) -> Result<Option<FeedbackVersion>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .headers
            .values()
            .filter(|f| f.manager_id() == *manager_id && f.developer_id() == *developer_id)
            .map(|f| f.version())
            .max())
    }

    async fn save_header(&self, feedback: &Feedback) -> Result<(), DomainError> {
        self.tables
            .write()
            .await
            .headers
            .insert(feedback.id(), feedback.clone());
        Ok(())
    }

    async fn save_complete(&self, feedback: &CompleteFeedback) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        tables.headers.insert(feedback.id(), feedback.header().clone());
        tables.dimensions.extend(feedback.dimensions().iter().cloned());
        tables.comments.extend(feedback.comments().iter().cloned());
        Ok(())
    }

    async fn update_header(&self, feedback: &Feedback) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        match tables.headers.get_mut(&feedback.id()) {
            Some(stored) => {
                *stored = feedback.clone();
                Ok(())
            }
            None => Err(not_found(&feedback.id())),
        }
    }

    async fn find_by_id(&self, id: &FeedbackId) -> Result<Option<Feedback>, DomainError> {
        Ok(self.tables.read().await.headers.get(id).cloned())
    }

    async fn find_complete(&self, id: &FeedbackId) -> Result<Option<CompleteFeedback>, DomainError> {
        let tables = self.tables.read().await;
        let Some(header) = tables.headers.get(id) else {
            return Ok(None);
        };
        let dimensions = tables
            .dimensions
            .iter()
            .filter(|d| d.feedback_id == *id)
            .cloned()
            .collect();
        let comments = tables
            .comments
            .iter()
            .filter(|c| c.feedback_id == *id)
            .cloned()
            .collect();
        Ok(Some(CompleteFeedback::from_parts(
            header.clone(),
            dimensions,
            comments,
        )))
    }

    async fn find_by_pair(
        &self,
        manager_id: &UserId,
        developer_id: &UserId,
    ) -> Result<Vec<Feedback>, DomainError> {
        let tables = self.tables.read().await;
        let mut found: Vec<Feedback> = tables
            .headers
            .values()
            .filter(|f| f.manager_id() == *manager_id && f.developer_id() == *developer_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.version().cmp(&a.version()));
        Ok(found)
    }

    async fn find_by_manager(&self, manager_id: &UserId) -> Result<Vec<Feedback>, DomainError> {
        let criteria = FeedbackSearchCriteria {
            manager_id: Some(*manager_id),
            ..Default::default()
        };
        Ok(self.tables.read().await.select(&criteria))
    }

    async fn find_by_developer(&self, developer_id: &UserId) -> Result<Vec<Feedback>, DomainError> {
        let criteria = FeedbackSearchCriteria {
            developer_id: Some(*developer_id),
            ..Default::default()
        };
        Ok(self.tables.read().await.select(&criteria))
    }

    async fn search(&self, criteria: &FeedbackSearchCriteria) -> Result<Vec<Feedback>, DomainError> {
        Ok(self.tables.read().await.select(criteria))
    }

    async fn dimension_exists(
        &self,
        feedback_id: &FeedbackId,
        dimension_id: &DimensionId,
    ) -> Result<bool, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .dimensions
            .iter()
            .any(|d| d.feedback_id == *feedback_id && d.dimension_id == *dimension_id))
    }

    async fn add_dimension(&self, entry: &FeedbackDimensionEntry) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        tables.require(&entry.feedback_id)?;
        if tables
            .dimensions
            .iter()
            .any(|d| d.feedback_id == entry.feedback_id && d.dimension_id == entry.dimension_id)
        {
            return Err(DomainError::new(
                ErrorCode::DuplicateFeedbackDimension,
                format!(
                    "Feedback {} already rates dimension {}",
                    entry.feedback_id, entry.dimension_id
                ),
            ));
        }
        tables.dimensions.push(entry.clone());
        Ok(())
    }

    async fn add_comment(&self, entry: &FeedbackCommentEntry) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        tables.require(&entry.feedback_id)?;
        tables.comments.push(entry.clone());
        Ok(())
    }

    async fn delete(&self, id: &FeedbackId) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        if tables.headers.remove(id).is_none() {
            return Err(not_found(id));
        }
        tables.dimensions.retain(|d| d.feedback_id != *id);
        tables.comments.retain(|c| c.feedback_id != *id);
        Ok(())
    }
}
