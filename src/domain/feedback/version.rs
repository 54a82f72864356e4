//! Feedback version numbers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Position of a feedback record in its (manager, developer) sequence.
///
/// Always ≥ 1. The next version for a pair is one past the highest existing
/// one, or `FIRST` when the pair has no feedback yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct FeedbackVersion(u32);

impl FeedbackVersion {
    pub const FIRST: Self = Self(1);

    /// Creates a version, rejecting anything below 1.
    pub fn new(value: i32) -> Result<Self, ValidationError> {
        if value < 1 {
            return Err(ValidationError::out_of_range(
                "feedback_version",
                1,
                i32::MAX,
                value,
            ));
        }
        Ok(Self(value as u32))
    }

    /// Version that follows the current maximum for a pair.
    pub fn after(current_max: Option<FeedbackVersion>) -> Self {
        match current_max {
            Some(max) => max.next(),
            None => Self::FIRST,
        }
    }

    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }

    pub fn value(&self) -> i32 {
        i32::try_from(self.0).unwrap_or(i32::MAX)
    }
}

impl TryFrom<i32> for FeedbackVersion {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        FeedbackVersion::new(value)
    }
}

impl From<FeedbackVersion> for i32 {
    fn from(version: FeedbackVersion) -> Self {
        version.value()
    }
}

impl fmt::Display for FeedbackVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_version_when_pair_has_none() {
        assert_eq!(FeedbackVersion::after(None), FeedbackVersion::FIRST);
        assert_eq!(FeedbackVersion::FIRST.value(), 1);
    }

    #[test]
    fn next_version_is_max_plus_one() {
        let max = FeedbackVersion::new(7).unwrap();
        assert_eq!(FeedbackVersion::after(Some(max)).value(), 8);
    }

    #[test]
    fn zero_and_negative_are_rejected() {
        assert!(FeedbackVersion::new(0).is_err());
        assert!(FeedbackVersion::new(-3).is_err());
    }

    #[test]
    fn deserialization_enforces_minimum() {
        assert!(serde_json::from_str::<FeedbackVersion>("0").is_err());
        let v: FeedbackVersion = serde_json::from_str("2").unwrap();
        assert_eq!(v.value(), 2);
    }
}
