//! Comment template lookup port.

use async_trait::async_trait;

use crate::domain::feedback::CommentTemplate;
use crate::domain::foundation::{CommentTemplateId, DomainError};

#[async_trait]
pub trait CommentTemplateRepository: Send + Sync {
    async fn find_by_id(&self, id: &CommentTemplateId) -> Result<Option<CommentTemplate>, DomainError>;

    async fn find_all(&self) -> Result<Vec<CommentTemplate>, DomainError>;
}
