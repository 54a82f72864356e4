//! Feedback search filter.

use serde::{Deserialize, Serialize};

use super::{Feedback, FeedbackVersion};
use crate::domain::foundation::{Timestamp, UserId};

/// Optional filters over feedback headers. Every set field must match;
/// an empty criteria matches everything.
///
/// Both creation bounds are inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSearchCriteria {
    pub manager_id: Option<UserId>,
    pub developer_id: Option<UserId>,
    pub feedback_version: Option<FeedbackVersion>,
    pub created_after: Option<Timestamp>,
    pub created_before: Option<Timestamp>,
}

impl FeedbackSearchCriteria {
    pub fn matches(&self, feedback: &Feedback) -> bool {
        self.manager_id.map_or(true, |id| feedback.manager_id() == id)
            && self.developer_id.map_or(true, |id| feedback.developer_id() == id)
            && self
                .feedback_version
                .map_or(true, |v| feedback.version() == v)
            && self
                .created_after
                .map_or(true, |after| feedback.created_at() >= after)
            && self
                .created_before
                .map_or(true, |before| feedback.created_at() <= before)
    }
}
