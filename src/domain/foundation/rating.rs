//! Rating value object for competency scores (1 to 5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Competency rating, always an integer in `[1, 5]`.
///
/// Construction is the only place the range is checked, so any `Rating` that
/// reaches scoring or persistence is already valid. Deserialization goes
/// through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Rating(u8);

impl Rating {
    /// Lowest allowed rating.
    pub const MIN: i32 = 1;

    /// Highest allowed rating.
    pub const MAX: i32 = 5;

    /// Creates a Rating from an integer, returning error if out of range.
    pub fn new(value: i32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "rating",
                Self::MIN,
                Self::MAX,
                value,
            ));
        }
        Ok(Self(value as u8))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> i32 {
        i32::from(self.0)
    }
}

impl TryFrom<i32> for Rating {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for i32 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
