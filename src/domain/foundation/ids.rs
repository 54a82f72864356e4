//! Strongly-typed identifier value objects.
//!
//! Every identifier in the assessment domain is a UUID. Wrapping each one in
//! its own newtype keeps a `FeedbackId` from ever being passed where a
//! `DimensionId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! uuid_identifier {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            #[doc = concat!("Creates a new random ", stringify!($name), ".")]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            #[doc = concat!("Creates a ", stringify!($name), " from an existing UUID.")]
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

uuid_identifier!(
    /// Identifier of a user (developer, manager or admin) in the identity service.
    UserId
);

uuid_identifier!(
    /// Unique identifier for a self-assessment.
    AssessmentId
);

uuid_identifier!(
    /// Identifier of a competency dimension in the dimension catalog.
    DimensionId
);

uuid_identifier!(
    /// Unique identifier for a manager feedback record.
    FeedbackId
);

uuid_identifier!(
    /// Unique identifier for a single per-dimension rating inside a feedback record.
    FeedbackDimensionId
);

uuid_identifier!(
    /// Unique identifier for a comment entry inside a feedback record.
    FeedbackCommentId
);

uuid_identifier!(
    /// Identifier of a comment template ("Key Strengths & Achievements", ...).
    CommentTemplateId
);
