//! ApplyUserEventHandler - keeps the local user snapshots in step with identity events.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::DomainError;
use crate::domain::user::{UserEvent, UserSnapshot};
use crate::ports::UserDirectory;

/// What applying an event did to the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSyncOutcome {
    Created,
    Refreshed,
    Removed,
    Ignored,
}

pub struct ApplyUserEventHandler {
    directory: Arc<dyn UserDirectory>,
}

impl ApplyUserEventHandler {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    /// Create and update both upsert. An existing snapshot only takes the new
    /// name and username; a missing one is built from the whole event.
    pub async fn handle(&self, event: UserEvent) -> Result<UserSyncOutcome, DomainError> {
        match event {
            UserEvent::UserCreated(data) | UserEvent::UserUpdated(data) => {
                match self.directory.find_snapshot(&data.user_id).await? {
                    Some(mut snapshot) => {
                        snapshot.refresh_from(&data);
                        self.directory.upsert(&snapshot).await?;
                        debug!(user_id = %data.user_id, "User snapshot refreshed");
                        Ok(UserSyncOutcome::Refreshed)
                    }
                    None => {
                        self.directory.upsert(&UserSnapshot::from_event(&data)).await?;
                        info!(user_id = %data.user_id, role = %data.role, "User snapshot created");
                        Ok(UserSyncOutcome::Created)
                    }
                }
            }
            UserEvent::UserDeleted { user_id } => {
                if self.directory.delete(&user_id).await? {
                    info!(user_id = %user_id, "User snapshot removed");
                    Ok(UserSyncOutcome::Removed)
                } else {
                    debug!(user_id = %user_id, "Delete for unknown user ignored");
                    Ok(UserSyncOutcome::Ignored)
                }
            }
        }
    }
}
