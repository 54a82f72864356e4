//! Denormalized user identity carried on outbound events.

use serde::{Deserialize, Serialize};

use super::{UserRole, UserSnapshot};
use crate::domain::foundation::UserId;

/// Display name used when no snapshot exists for a user.
pub const UNKNOWN_FULL_NAME: &str = "Unknown User";
/// Username used when no snapshot exists for a user.
pub const UNKNOWN_USERNAME: &str = "unknown";
/// Email used when no snapshot exists for a user.
pub const UNKNOWN_EMAIL: &str = "unknown@example.com";

/// Identity snapshot attached to an event at publish time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserContext {
    pub user_id: UserId,
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub manager_id: Option<UserId>,
}

impl UserContext {
    /// Sentinel identity for a user the directory does not know.
    ///
    /// Keeps the requested id so consumers can still correlate.
    pub fn unknown(user_id: UserId) -> Self {
        Self {
            user_id,
            full_name: UNKNOWN_FULL_NAME.to_string(),
            username: UNKNOWN_USERNAME.to_string(),
            email: UNKNOWN_EMAIL.to_string(),
            role: UserRole::Unknown,
            manager_id: None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.role == UserRole::Unknown && self.full_name == UNKNOWN_FULL_NAME
    }
}

impl From<&UserSnapshot> for UserContext {
    fn from(snapshot: &UserSnapshot) -> Self {
        Self {
            user_id: snapshot.user_id(),
            full_name: snapshot.full_name().to_string(),
            username: snapshot.username().to_string(),
            email: snapshot.email().to_string(),
            role: snapshot.role(),
            manager_id: snapshot.manager_id(),
        }
    }
}
