//! Feedback reconciliation - joins a self-assessment with manager feedback.
//!
//! Operates on already-fetched data only. Gathering dimension names, comment
//! titles and the latest submitted assessment is the caller's job.

use serde::{Deserialize, Serialize};

use super::{AnalysisPayload, ScoreMap, ScoreSection};
use crate::domain::dimension::normalize_dimension_key;
use crate::domain::foundation::{Rating, UserId};

/// Separator between combined comment pieces.
pub const COMMENT_SEPARATOR: &str = " | ";

/// A rating labelled with its dimension's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredDimension {
    pub name: String,
    pub rating: Rating,
}

impl ScoredDimension {
    pub fn new(name: impl Into<String>, rating: Rating) -> Self {
        Self {
            name: name.into(),
            rating,
        }
    }
}

/// A comment body labelled with its template title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitledComment {
    pub title: String,
    pub body: String,
}

impl TitledComment {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// The developer's self-assessment, resolved for reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfAssessmentView {
    pub reflection: String,
    pub dimensions: Vec<ScoredDimension>,
}

/// The manager's feedback, resolved for reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManagerFeedbackView {
    pub dimensions: Vec<ScoredDimension>,
    pub comments: Vec<TitledComment>,
}

/// Stateless reconciliation functions.
pub struct FeedbackReconciler;

impl FeedbackReconciler {
    /// Builds the payload for `developer_id`.
    pub fn reconcile(
        developer_id: UserId,
        self_assessment: Option<SelfAssessmentView>,
        manager_feedback: ManagerFeedbackView,
    ) -> AnalysisPayload {
        let self_section = self_assessment.map(|view| ScoreSection {
            scores: Self::score_map(&view.dimensions),
            reflection: view.reflection,
        });

        AnalysisPayload {
            subject_user_id: developer_id,
            self_assessment: self_section,
            manager_feedback: ScoreSection {
                scores: Self::score_map(&manager_feedback.dimensions),
                reflection: Self::combine_comments(&manager_feedback.comments),
            },
        }
    }

    /// Maps normalized dimension keys to ratings.
    ///
    /// Two names that normalize to the same key collapse; the later one wins.
    pub fn score_map(dimensions: &[ScoredDimension]) -> ScoreMap {
        dimensions
            .iter()
            .map(|d| (normalize_dimension_key(&d.name), d.rating.value()))
            .collect()
    }

    /// Joins comments as `"<title>: <body>"` pieces, in order.
    pub fn combine_comments(comments: &[TitledComment]) -> String {
        comments
            .iter()
            .map(|c| format!("{}: {}", c.title, c.body))
            .collect::<Vec<_>>()
            .join(COMMENT_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(name: &str, rating: i32) -> ScoredDimension {
        ScoredDimension::new(name, Rating::new(rating).unwrap())
    }

    #[test]
    fn combines_comments_in_order() {
        let combined = FeedbackReconciler::combine_comments(&[
            TitledComment::new("Key Strengths", "Good code"),
            TitledComment::new("Growth Areas", "Improve tests"),
        ]);
        assert_eq!(combined, "Key Strengths: Good code | Growth Areas: Improve tests");
    }

    #[test]
    fn no_comments_combine_to_empty_string() {
        assert_eq!(FeedbackReconciler::combine_comments(&[]), "");
    }

    #[test]
    fn score_map_uses_normalized_keys() {
        let map = FeedbackReconciler::score_map(&[
            scored("Team Dynamics & Leadership", 4),
            scored("Technical Excellence", 5),
        ]);

        assert_eq!(map.get("teamdynamicsleadership"), Some(&4));
        assert_eq!(map.get("technicalexcellence"), Some(&5));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn colliding_keys_keep_last_rating() {
        let map = FeedbackReconciler::score_map(&[
            scored("Growth & Innovation", 2),
            scored("growth innovation", 5),
        ]);
        assert_eq!(map.get("growthinnovation"), Some(&5));
    }

    #[test]
    fn missing_self_assessment_leaves_section_absent() {
        let developer = UserId::new();
        let payload = FeedbackReconciler::reconcile(
            developer,
            None,
            ManagerFeedbackView {
                dimensions: vec![scored("Execution & Results", 3)],
                comments: vec![TitledComment::new("Overall", "Steady")],
            },
        );

        assert_eq!(payload.subject_user_id, developer);
        assert!(!payload.has_self_assessment());
        assert_eq!(payload.manager_feedback.scores.get("executionresults"), Some(&3));
        assert_eq!(payload.manager_feedback.reflection, "Overall: Steady");
    }

    #[test]
    fn self_reflection_is_carried_unchanged() {
        let payload = FeedbackReconciler::reconcile(
            UserId::new(),
            Some(SelfAssessmentView {
                reflection: "  I grew a lot & learned Rust  ".to_string(),
                dimensions: vec![scored("Technical Excellence", 4)],
            }),
            ManagerFeedbackView::default(),
        );

        let section = payload.self_assessment.unwrap();
        assert_eq!(section.reflection, "  I grew a lot & learned Rust  ");
        assert_eq!(section.scores.get("technicalexcellence"), Some(&4));
    }

    #[test]
    fn payload_serializes_for_analysis_consumer() {
        let developer = UserId::new();
        let payload = FeedbackReconciler::reconcile(developer, None, ManagerFeedbackView::default());
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["userId"], developer.to_string());
        assert!(value["selfAssessment"].is_null());
        assert!(value["managerFeedback"]["scores"].is_object());
    }
}
