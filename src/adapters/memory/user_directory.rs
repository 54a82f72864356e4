//! In-memory user snapshot directory.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{UserContext, UserSnapshot};
use crate::ports::UserDirectory;

#[derive(Default)]
pub struct InMemoryUserDirectory {
    snapshots: RwLock<HashMap<UserId, UserSnapshot>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.snapshots.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.snapshots.read().await.is_empty()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_user_context(&self, user_id: &UserId) -> Result<Option<UserContext>, DomainError> {
        Ok(self
            .snapshots
            .read()
            .await
            .get(user_id)
            .map(UserContext::from))
    }

    async fn find_snapshot(&self, user_id: &UserId) -> Result<Option<UserSnapshot>, DomainError> {
        Ok(self.snapshots.read().await.get(user_id).cloned())
    }

    async fn upsert(&self, snapshot: &UserSnapshot) -> Result<(), DomainError> {
        self.snapshots
            .write()
            .await
            .insert(snapshot.user_id(), snapshot.clone());
        Ok(())
    }

    async fn delete(&self, user_id: &UserId) -> Result<bool, DomainError> {
        Ok(self.snapshots.write().await.remove(user_id).is_some())
    }
}
