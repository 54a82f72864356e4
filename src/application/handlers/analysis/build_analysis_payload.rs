//! AnalysisPayloadBuilder - gathers the data reconciliation needs.
//!
//! Fetches the developer's latest submitted assessment, resolves dimension
//! names and comment titles, then hands everything to `FeedbackReconciler`.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::analysis::{
    AnalysisPayload, FeedbackReconciler, ManagerFeedbackView, ScoredDimension, SelfAssessmentView,
    TitledComment,
};
use crate::domain::feedback::{CompleteFeedback, FeedbackError};
use crate::domain::foundation::{DimensionId, DomainError, FeedbackId, Rating};
use crate::ports::{
    AssessmentRepository, CommentTemplateRepository, DimensionCatalog, FeedbackRepository,
};

/// Builds the analysis payload for a feedback record.
pub struct AnalysisPayloadBuilder {
    assessments: Arc<dyn AssessmentRepository>,
    feedback: Arc<dyn FeedbackRepository>,
    catalog: Arc<dyn DimensionCatalog>,
    templates: Arc<dyn CommentTemplateRepository>,
}

impl AnalysisPayloadBuilder {
    pub fn new(
        assessments: Arc<dyn AssessmentRepository>,
        feedback: Arc<dyn FeedbackRepository>,
        catalog: Arc<dyn DimensionCatalog>,
        templates: Arc<dyn CommentTemplateRepository>,
    ) -> Self {
        Self {
            assessments,
            feedback,
            catalog,
            templates,
        }
    }

    /// Loads the feedback by id and builds its payload.
    pub async fn build_for(&self, feedback_id: FeedbackId) -> Result<AnalysisPayload, FeedbackError> {
        let feedback = self
            .feedback
            .find_complete(&feedback_id)
            .await?
            .ok_or(FeedbackError::NotFound(feedback_id))?;
        Ok(self.build(&feedback).await?)
    }

    /// Builds the payload for an already-loaded feedback record.
    ///
    /// A developer without a submitted assessment gets no self section. Entries
    /// whose dimension or template has since left the catalog are skipped.
    pub async fn build(&self, feedback: &CompleteFeedback) -> Result<AnalysisPayload, DomainError> {
        let developer_id = feedback.header().developer_id();
        let mut names = NameCache::default();

        let self_view = match self.assessments.find_latest_submitted(&developer_id).await? {
            Some(assessment) => {
                let mut dimensions = Vec::with_capacity(assessment.dimensions().len());
                for rated in assessment.dimensions() {
                    if let Some(scored) = names.scored(self.catalog.as_ref(), rated.dimension_id, rated.rating).await? {
                        dimensions.push(scored);
                    }
                }
                Some(SelfAssessmentView {
                    reflection: assessment.reflection().to_string(),
                    dimensions,
                })
            }
            None => {
                debug!(developer_id = %developer_id, "No submitted self-assessment, manager section only");
                None
            }
        };

        let mut manager_view = ManagerFeedbackView::default();
        for entry in feedback.dimensions() {
            if let Some(scored) = names.scored(self.catalog.as_ref(), entry.dimension_id, entry.rating).await? {
                manager_view.dimensions.push(scored);
            }
        }
        for entry in feedback.comments() {
            match self.templates.find_by_id(&entry.template_id).await? {
                Some(template) => manager_view
                    .comments
                    .push(TitledComment::new(template.title(), entry.body.clone())),
                None => {
                    warn!(template_id = %entry.template_id, feedback_id = %feedback.id(), "Comment template missing, comment left out of analysis")
                }
            }
        }

        Ok(FeedbackReconciler::reconcile(developer_id, self_view, manager_view))
    }
}

/// Dimension names looked up once per build.
#[derive(Default)]
struct NameCache {
    names: HashMap<DimensionId, Option<String>>,
}

impl NameCache {
    async fn scored(
        &mut self,
        catalog: &dyn DimensionCatalog,
        id: DimensionId,
        rating: Rating,
    ) -> Result<Option<ScoredDimension>, DomainError> {
        if !self.names.contains_key(&id) {
            let name = catalog.find_by_id(&id).await?.map(|d| d.name().to_string());
            if name.is_none() {
                warn!(dimension_id = %id, "Dimension missing from catalog, rating left out of analysis");
            }
            self.names.insert(id, name);
        }
        Ok(self
            .names
            .get(&id)
            .and_then(|name| name.as_ref())
            .map(|name| ScoredDimension::new(name.clone(), rating)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Harness;
    use crate::domain::assessment::{Assessment, RatedDimension, SubmissionStatus};
    use crate::domain::feedback::{
        Feedback, FeedbackCommentInput, FeedbackDimensionInput, FeedbackVersion,
    };
    use crate::domain::foundation::{AssessmentId, Timestamp, UserId};

    fn builder(h: &Harness) -> AnalysisPayloadBuilder {
        AnalysisPayloadBuilder::new(
            h.assessments.clone(),
            h.feedback.clone(),
            h.catalog.clone(),
            h.templates.clone(),
        )
    }

    fn rating(value: i32) -> Rating {
        Rating::new(value).unwrap()
    }

    async fn feedback_for(h: &Harness, developer: UserId) -> CompleteFeedback {
        let header = Feedback::new(FeedbackId::new(), UserId::new(), developer, FeedbackVersion::FIRST, Timestamp::now());
        let mut complete = CompleteFeedback::new(header);
        let now = Timestamp::now();
        complete
            .add_dimension(
                FeedbackDimensionInput {
                    dimension_id: h.dimension("Technical Excellence").await.id(),
                    rating: rating(4),
                    comment: "Solid".to_string(),
                },
                now,
            )
            .unwrap();
        complete
            .add_dimension(
                FeedbackDimensionInput {
                    dimension_id: h.dimension("Communication & Collaboration").await.id(),
                    rating: rating(3),
                    comment: String::new(),
                },
                now,
            )
            .unwrap();
        complete.add_comment(FeedbackCommentInput {
            template_id: h.template("Key Strengths & Achievements").await.id(),
            body: "Good code".to_string(),
        });
        complete.add_comment(FeedbackCommentInput {
            template_id: h.template("Development Opportunities").await.id(),
            body: "Improve tests".to_string(),
        });
        complete
    }

    #[tokio::test]
    async fn manager_only_when_no_self_assessment() {
        let h = Harness::seeded().await;
        let developer = UserId::new();
        let feedback = feedback_for(&h, developer).await;

        let payload = builder(&h).build(&feedback).await.unwrap();

        assert_eq!(payload.subject_user_id, developer);
        assert!(payload.self_assessment.is_none());
        assert_eq!(payload.manager_feedback.scores.get("technicalexcellence"), Some(&4));
        assert_eq!(payload.manager_feedback.scores.get("communicationcollaboration"), Some(&3));
        assert_eq!(
            payload.manager_feedback.reflection,
            "Key Strengths & Achievements: Good code | Development Opportunities: Improve tests"
        );
    }

    #[tokio::test]
    async fn uses_latest_submitted_assessment_only() {
        let h = Harness::seeded().await;
        let developer = UserId::new();
        let tech = h.dimension("Technical Excellence").await.id();

        let older = Timestamp::now().minus_days(60);
        h.assessments
            .save(&Assessment::reconstitute(
                AssessmentId::new(),
                developer,
                SubmissionStatus::Submitted,
                "Older".to_string(),
                vec![RatedDimension::new(tech, rating(2))],
                2,
                older,
                older,
            ))
            .await
            .unwrap();
        let newer = Timestamp::now().minus_days(5);
        h.assessments
            .save(&Assessment::reconstitute(
                AssessmentId::new(),
                developer,
                SubmissionStatus::Submitted,
                "Newer".to_string(),
                vec![RatedDimension::new(tech, rating(5))],
                5,
                newer,
                newer,
            ))
            .await
            .unwrap();
        h.assessments
            .save(&Assessment::reconstitute(
                AssessmentId::new(),
                developer,
                SubmissionStatus::Draft,
                "Unsubmitted draft".to_string(),
                vec![RatedDimension::new(tech, rating(1))],
                1,
                Timestamp::now(),
                Timestamp::now(),
            ))
            .await
            .unwrap();

        let payload = builder(&h).build(&feedback_for(&h, developer).await).await.unwrap();

        let section = payload.self_assessment.unwrap();
        assert_eq!(section.reflection, "Newer");
        assert_eq!(section.scores.get("technicalexcellence"), Some(&5));
    }

    #[tokio::test]
    async fn build_for_unknown_feedback_is_not_found() {
        let h = Harness::seeded().await;
        let id = FeedbackId::new();
        assert_eq!(builder(&h).build_for(id).await, Err(FeedbackError::NotFound(id)));
    }

    #[tokio::test]
    async fn removed_dimension_is_left_out() {
        let h = Harness::seeded().await;
        let developer = UserId::new();
        let feedback = feedback_for(&h, developer).await;
        h.catalog.remove(&h.dimension("Technical Excellence").await.id()).await;

        let payload = builder(&h).build(&feedback).await.unwrap();

        assert_eq!(payload.manager_feedback.scores.len(), 1);
        assert!(payload.manager_feedback.scores.contains_key("communicationcollaboration"));
    }
}
