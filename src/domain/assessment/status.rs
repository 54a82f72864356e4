//! Assessment submission status.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Submission state of a self-assessment.
///
/// `Draft -> Submitted` is the only edge. A submitted assessment never
/// returns to draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    Draft,
    Submitted,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Draft => "DRAFT",
            SubmissionStatus::Submitted => "SUBMITTED",
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmissionStatus::Submitted)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StateMachine for SubmissionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!(
            (self, target),
            (SubmissionStatus::Draft, SubmissionStatus::Submitted)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            SubmissionStatus::Draft => vec![SubmissionStatus::Submitted],
            SubmissionStatus::Submitted => vec![],
        }
    }
}
