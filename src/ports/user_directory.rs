//! User directory port.
//!
//! Resolves identity snapshots for event enrichment and stores the snapshots
//! fed by identity-service events.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{UserContext, UserSnapshot};

#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Identity context for a user, or `None` if no snapshot exists.
    async fn find_user_context(&self, user_id: &UserId) -> Result<Option<UserContext>, DomainError>;

    async fn find_snapshot(&self, user_id: &UserId) -> Result<Option<UserSnapshot>, DomainError>;

    /// Insert or replace a snapshot.
    async fn upsert(&self, snapshot: &UserSnapshot) -> Result<(), DomainError>;

    /// Remove a snapshot. Returns false if there was none.
    async fn delete(&self, user_id: &UserId) -> Result<bool, DomainError>;
}
