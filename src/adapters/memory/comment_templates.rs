//! In-memory comment template store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::feedback::CommentTemplate;
use crate::domain::foundation::{CommentTemplateId, DomainError};
use crate::ports::CommentTemplateRepository;

#[derive(Default)]
pub struct InMemoryCommentTemplates {
    templates: RwLock<HashMap<CommentTemplateId, CommentTemplate>>,
}

impl InMemoryCommentTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, template: CommentTemplate) {
        self.templates.write().await.insert(template.id(), template);
    }

    /// Looks a template up by its exact title.
    pub async fn find_by_title(&self, title: &str) -> Option<CommentTemplate> {
        self.templates
            .read()
            .await
            .values()
            .find(|t| t.title() == title)
            .cloned()
    }

    pub async fn is_empty(&self) -> bool {
        self.templates.read().await.is_empty()
    }
}

#[async_trait]
impl CommentTemplateRepository for InMemoryCommentTemplates {
    async fn find_by_id(&self, id: &CommentTemplateId) -> Result<Option<CommentTemplate>, DomainError> {
        Ok(self.templates.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<CommentTemplate>, DomainError> {
        let mut all: Vec<CommentTemplate> = self.templates.read().await.values().cloned().collect();
        all.sort_by(|a, b| a.title().cmp(b.title()));
        Ok(all)
    }
}
