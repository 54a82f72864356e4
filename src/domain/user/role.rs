//! User roles known to the assessment service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a user, as mirrored from the identity service.
///
/// Any role name this service does not recognise deserializes as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Developer,
    Manager,
    Admin,
    #[serde(other)]
    Unknown,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Developer => "DEVELOPER",
            UserRole::Manager => "MANAGER",
            UserRole::Admin => "ADMIN",
            UserRole::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
