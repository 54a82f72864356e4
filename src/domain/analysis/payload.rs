//! Combined self-assessment / manager-feedback payload.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::UserId;

/// Normalized dimension key to rating.
pub type ScoreMap = BTreeMap<String, i32>;

/// One side of the comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSection {
    pub scores: ScoreMap,
    pub reflection: String,
}

/// Derived payload handed to the analysis consumer. Not persisted.
///
/// `self_assessment` is `None` when the developer has never submitted one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPayload {
    #[serde(rename = "userId")]
    pub subject_user_id: UserId,
    pub self_assessment: Option<ScoreSection>,
    pub manager_feedback: ScoreSection,
}

impl AnalysisPayload {
    pub fn has_self_assessment(&self) -> bool {
        self.self_assessment.is_some()
    }
}
