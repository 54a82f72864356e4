//! Local mirror of user identity, fed by identity-service events.

use serde::{Deserialize, Serialize};

use super::UserRole;
use crate::domain::foundation::{Timestamp, UserId};

/// Inbound user lifecycle change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "eventType", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserEvent {
    UserCreated(UserEventData),
    UserUpdated(UserEventData),
    UserDeleted {
        #[serde(rename = "userId")]
        user_id: UserId,
    },
}

impl UserEvent {
    pub fn user_id(&self) -> UserId {
        match self {
            UserEvent::UserCreated(data) | UserEvent::UserUpdated(data) => data.user_id,
            UserEvent::UserDeleted { user_id } => *user_id,
        }
    }
}

/// Identity fields carried by create and update events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEventData {
    pub user_id: UserId,
    pub manager_id: Option<UserId>,
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
}

/// Snapshot of a user as last seen by this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSnapshot {
    user_id: UserId,
    manager_id: Option<UserId>,
    full_name: String,
    username: String,
    email: String,
    role: UserRole,
    updated_at: Timestamp,
}

impl UserSnapshot {
    pub fn new(
        user_id: UserId,
        manager_id: Option<UserId>,
        full_name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            user_id,
            manager_id,
            full_name: full_name.into(),
            username: username.into(),
            email: email.into(),
            role,
            updated_at: Timestamp::now(),
        }
    }

    /// Builds a fresh snapshot from every field of an event.
    pub fn from_event(data: &UserEventData) -> Self {
        Self::new(
            data.user_id,
            data.manager_id,
            data.full_name.clone(),
            data.username.clone(),
            data.email.clone(),
            data.role,
        )
    }

    /// Applies a create/update event to an existing snapshot.
    ///
    /// Only the display name and username are refreshed; manager, email and
    /// role stay as they were.
    pub fn refresh_from(&mut self, data: &UserEventData) {
        self.full_name = data.full_name.clone();
        self.username = data.username.clone();
        self.updated_at = Timestamp::now();
    }

    /// Points this user at a manager.
    pub fn assign_manager(&mut self, manager_id: UserId) {
        self.manager_id = Some(manager_id);
        self.updated_at = Timestamp::now();
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn manager_id(&self) -> Option<UserId> {
        self.manager_id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}
