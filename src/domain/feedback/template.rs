//! Comment templates: the titled prompts managers answer in feedback.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CommentTemplateId, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentTemplate {
    id: CommentTemplateId,
    title: String,
    content: String,
}

impl CommentTemplate {
    pub fn new(
        id: CommentTemplateId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        Ok(Self {
            id,
            title,
            content: content.into(),
        })
    }

    pub fn id(&self) -> CommentTemplateId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Guidance text shown to the manager.
    pub fn content(&self) -> &str {
        &self.content
    }
}
