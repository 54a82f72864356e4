//! User-directory error types.

use thiserror::Error;

use super::UserRole;
use crate::domain::foundation::{DomainError, ErrorCategory, ErrorCode, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(UserId),

    #[error("User {user_id} has role {actual}, expected {expected}")]
    InvalidRole {
        user_id: UserId,
        expected: UserRole,
        actual: UserRole,
    },

    #[error(transparent)]
    Infrastructure(DomainError),
}

impl UserError {
    pub fn code(&self) -> ErrorCode {
        match self {
            UserError::NotFound(_) => ErrorCode::UserNotFound,
            UserError::InvalidRole { .. } => ErrorCode::InvalidUserRole,
            UserError::Infrastructure(err) => err.code,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.code().category()
    }
}

impl From<DomainError> for UserError {
    fn from(err: DomainError) -> Self {
        UserError::Infrastructure(err)
    }
}
