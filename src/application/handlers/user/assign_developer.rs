//! AssignDeveloperHandler - links a developer snapshot to a manager.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::UserId;
use crate::domain::user::{UserError, UserRole, UserSnapshot};
use crate::ports::UserDirectory;

#[derive(Debug, Clone, Copy)]
pub struct AssignDeveloperCommand {
    pub developer_id: UserId,
    pub manager_id: UserId,
}

pub struct AssignDeveloperHandler {
    directory: Arc<dyn UserDirectory>,
}

impl AssignDeveloperHandler {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    /// Assigning a developer to the manager they already have succeeds unchanged.
    pub async fn handle(&self, cmd: AssignDeveloperCommand) -> Result<UserSnapshot, UserError> {
        let mut developer = self.require(cmd.developer_id, UserRole::Developer).await?;
        self.require(cmd.manager_id, UserRole::Manager).await?;

        if developer.manager_id() == Some(cmd.manager_id) {
            return Ok(developer);
        }

        developer.assign_manager(cmd.manager_id);
        self.directory.upsert(&developer).await?;
        info!(developer_id = %cmd.developer_id, manager_id = %cmd.manager_id, "Developer assigned to manager");
        Ok(developer)
    }

    async fn require(&self, user_id: UserId, expected: UserRole) -> Result<UserSnapshot, UserError> {
        let snapshot = self
            .directory
            .find_snapshot(&user_id)
            .await?
            .ok_or(UserError::NotFound(user_id))?;
        if snapshot.role() != expected {
            return Err(UserError::InvalidRole {
                user_id,
                expected,
                actual: snapshot.role(),
            });
        }
        Ok(snapshot)
    }
}
