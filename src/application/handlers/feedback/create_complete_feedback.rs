//! CreateCompleteFeedbackHandler - Command handler for a full feedback record.

use std::sync::Arc;

use tracing::{error, info};

use crate::application::handlers::analysis::AnalysisPayloadBuilder;
use crate::application::{DomainEventEmitter, KeyedLocks, PairKey};
use crate::domain::feedback::{
    CompleteFeedback, Feedback, FeedbackCommentInput, FeedbackDimensionInput, FeedbackError,
    FeedbackVersion,
};
use crate::domain::foundation::{EventKind, FeedbackId, Timestamp, UserId};
use crate::ports::{CommentTemplateRepository, DimensionCatalog, FeedbackRepository};

/// Command to create feedback with its dimension ratings and comments.
#[derive(Debug, Clone)]
pub struct CreateCompleteFeedbackCommand {
    pub manager_id: UserId,
    pub developer_id: UserId,
    pub dimensions: Vec<FeedbackDimensionInput>,
    pub comments: Vec<FeedbackCommentInput>,
}

/// Handler for creating complete feedback.
///
/// Allocates the next version for the pair, validates every entry, then
/// persists header and entries together. Emits `FeedbackCreated` and the
/// derived `AnalysisSubmitted`, both best-effort.
pub struct CreateCompleteFeedbackHandler {
    repository: Arc<dyn FeedbackRepository>,
    catalog: Arc<dyn DimensionCatalog>,
    templates: Arc<dyn CommentTemplateRepository>,
    analysis: Arc<AnalysisPayloadBuilder>,
    emitter: Arc<DomainEventEmitter>,
    locks: Arc<KeyedLocks<PairKey>>,
}

impl CreateCompleteFeedbackHandler {
    pub fn new(
        repository: Arc<dyn FeedbackRepository>,
        catalog: Arc<dyn DimensionCatalog>,
        templates: Arc<dyn CommentTemplateRepository>,
        analysis: Arc<AnalysisPayloadBuilder>,
        emitter: Arc<DomainEventEmitter>,
        locks: Arc<KeyedLocks<PairKey>>,
    ) -> Self {
        Self {
            repository,
            catalog,
            templates,
            analysis,
            emitter,
            locks,
        }
    }

    pub async fn handle(&self, cmd: CreateCompleteFeedbackCommand) -> Result<CompleteFeedback, FeedbackError> {
        if cmd.dimensions.is_empty() {
            return Err(FeedbackError::validation(
                "dimensions",
                "at least one dimension rating is required",
            ));
        }

        let pair_lock = self.locks.lock((cmd.manager_id, cmd.developer_id)).await;
        let now = Timestamp::now();

        // 1. Next version for the pair
        let current = self
            .repository
            .max_version_for(&cmd.manager_id, &cmd.developer_id)
            .await?;
        let header = Feedback::new(
            FeedbackId::new(),
            cmd.manager_id,
            cmd.developer_id,
            FeedbackVersion::after(current),
            now,
        );
        let mut feedback = CompleteFeedback::new(header);

        // 2. Dimension entries
        for input in cmd.dimensions {
            if self.catalog.find_by_id(&input.dimension_id).await?.is_none() {
                return Err(FeedbackError::DimensionNotFound(input.dimension_id));
            }
            feedback.add_dimension(input, now)?;
        }

        // 3. Comment entries
        for input in cmd.comments {
            if self.templates.find_by_id(&input.template_id).await?.is_none() {
                return Err(FeedbackError::CommentTemplateNotFound(input.template_id));
            }
            feedback.add_comment(input);
        }

        // 4. Header and entries land together
        self.repository.save_complete(&feedback).await?;
        drop(pair_lock);

        info!(
            feedback_id = %feedback.id(),
            manager_id = %cmd.manager_id,
            developer_id = %cmd.developer_id,
            version = feedback.header().version().value(),
            dimensions = feedback.dimensions().len(),
            comments = feedback.comments().len(),
            "Feedback created"
        );

        // 5. Best-effort events
        self.emitter
            .feedback(EventKind::FeedbackCreated, feedback.header())
            .await;
        match self.analysis.build(&feedback).await {
            Ok(payload) => {
                self.emitter
                    .analysis_submitted(feedback.header(), payload)
                    .await;
            }
            Err(err) => {
                error!(feedback_id = %feedback.id(), error = %err, "Failed to build analysis payload");
            }
        }

        Ok(feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::Harness;
    use crate::domain::assessment::{Assessment, RatedDimension, SubmissionStatus};
    use crate::domain::foundation::{
        AssessmentId, CommentTemplateId, DimensionId, ErrorCategory, Rating,
    };
    use crate::ports::AssessmentRepository;

    fn handler(h: &Harness) -> CreateCompleteFeedbackHandler {
        CreateCompleteFeedbackHandler::new(
            h.feedback.clone(),
            h.catalog.clone(),
            h.templates.clone(),
            Arc::new(AnalysisPayloadBuilder::new(
                h.assessments.clone(),
                h.feedback.clone(),
                h.catalog.clone(),
                h.templates.clone(),
            )),
            h.emitter.clone(),
            h.pair_locks.clone(),
        )
    }

    fn rated(dimension_id: DimensionId, rating: i32) -> FeedbackDimensionInput {
        FeedbackDimensionInput {
            dimension_id,
            rating: Rating::new(rating).unwrap(),
            comment: "noted".to_string(),
        }
    }

    async fn command(h: &Harness, manager: UserId, developer: UserId) -> CreateCompleteFeedbackCommand {
        CreateCompleteFeedbackCommand {
            manager_id: manager,
            developer_id: developer,
            dimensions: vec![
                rated(h.dimension("Technical Excellence").await.id(), 4),
                rated(h.dimension("Execution & Results").await.id(), 5),
            ],
            comments: vec![FeedbackCommentInput {
                template_id: h.template("Overall Performance Summary").await.id(),
                body: "Strong quarter".to_string(),
            }],
        }
    }

    #[tokio::test]
    async fn versions_increase_per_pair() {
        let h = Harness::seeded().await;
        let (manager, developer) = (UserId::new(), UserId::new());
        let handler = handler(&h);

        let first = handler.handle(command(&h, manager, developer).await).await.unwrap();
        let second = handler.handle(command(&h, manager, developer).await).await.unwrap();
        let other_pair = handler.handle(command(&h, manager, UserId::new()).await).await.unwrap();

        assert_eq!(first.header().version().value(), 1);
        assert_eq!(second.header().version().value(), 2);
        assert_eq!(other_pair.header().version().value(), 1);
    }

    #[tokio::test]
    async fn persists_entries_and_emits_both_events() {
        let h = Harness::seeded().await;
        let (manager, developer) = (UserId::new(), UserId::new());

        let created = handler(&h).handle(command(&h, manager, developer).await).await.unwrap();

        let stored = h.feedback.find_complete(&created.id()).await.unwrap().unwrap();
        assert_eq!(stored.dimensions().len(), 2);
        assert_eq!(stored.comments().len(), 1);

        assert_eq!(h.bus.events_of_kind(EventKind::FeedbackCreated).len(), 1);
        let analysis = h.bus.events_of_kind(EventKind::AnalysisSubmitted);
        assert_eq!(analysis.len(), 1);
        assert_eq!(analysis[0].payload["userId"], developer.to_string());
        assert!(analysis[0].payload["selfAssessment"].is_null());
        assert_eq!(analysis[0].payload["managerFeedback"]["scores"]["executionresults"], 5);
        assert_eq!(
            analysis[0].payload["managerFeedback"]["reflection"],
            "Overall Performance Summary: Strong quarter"
        );
    }

    #[tokio::test]
    async fn analysis_includes_submitted_self_assessment() {
        let h = Harness::seeded().await;
        let (manager, developer) = (UserId::new(), UserId::new());
        let tech = h.dimension("Technical Excellence").await.id();
        let at = Timestamp::now().minus_days(2);
        h.assessments
            .save(&Assessment::reconstitute(
                AssessmentId::new(),
                developer,
                SubmissionStatus::Submitted,
                "I led the rewrite".to_string(),
                vec![RatedDimension::new(tech, Rating::new(5).unwrap())],
                5,
                at,
                at,
            ))
            .await
            .unwrap();

        handler(&h).handle(command(&h, manager, developer).await).await.unwrap();

        let analysis = &h.bus.events_of_kind(EventKind::AnalysisSubmitted)[0];
        assert_eq!(analysis.payload["selfAssessment"]["reflection"], "I led the rewrite");
        assert_eq!(analysis.payload["selfAssessment"]["scores"]["technicalexcellence"], 5);
    }

    #[tokio::test]
    async fn empty_dimensions_are_rejected() {
        let h = Harness::seeded().await;
        let mut cmd = command(&h, UserId::new(), UserId::new()).await;
        cmd.dimensions.clear();

        let err = handler(&h).handle(cmd).await.unwrap_err();

        assert_eq!(err.category(), ErrorCategory::InvalidRequest);
        assert_eq!(h.feedback.header_count().await, 0);
    }

    #[tokio::test]
    async fn unknown_dimension_is_not_found_and_nothing_is_saved() {
        let h = Harness::seeded().await;
        let unknown = DimensionId::new();
        let mut cmd = command(&h, UserId::new(), UserId::new()).await;
        cmd.dimensions.push(rated(unknown, 3));

        let err = handler(&h).handle(cmd).await.unwrap_err();

        assert_eq!(err, FeedbackError::DimensionNotFound(unknown));
        assert_eq!(h.feedback.header_count().await, 0);
        assert_eq!(h.bus.event_count(), 0);
    }

    #[tokio::test]
    async fn unknown_template_is_not_found() {
        let h = Harness::seeded().await;
        let unknown = CommentTemplateId::new();
        let mut cmd = command(&h, UserId::new(), UserId::new()).await;
        cmd.comments.push(FeedbackCommentInput {
            template_id: unknown,
            body: "orphan".to_string(),
        });

        let err = handler(&h).handle(cmd).await.unwrap_err();

        assert_eq!(err, FeedbackError::CommentTemplateNotFound(unknown));
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[tokio::test]
    async fn duplicate_dimension_is_invalid_request() {
        let h = Harness::seeded().await;
        let mut cmd = command(&h, UserId::new(), UserId::new()).await;
        let again = cmd.dimensions[0].clone();
        cmd.dimensions.push(again);

        let err = handler(&h).handle(cmd).await.unwrap_err();

        assert!(matches!(err, FeedbackError::DuplicateDimension { .. }));
        assert_eq!(err.category(), ErrorCategory::InvalidRequest);
    }

    #[tokio::test]
    async fn concurrent_creations_get_distinct_versions() {
        let h = Harness::seeded().await;
        let (manager, developer) = (UserId::new(), UserId::new());
        let handler = Arc::new(handler(&h));

        let mut tasks = Vec::new();
        for _ in 0..5 {
            let handler = Arc::clone(&handler);
            let cmd = command(&h, manager, developer).await;
            tasks.push(tokio::spawn(async move { handler.handle(cmd).await }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let mut versions = h.feedback.versions_for(&manager, &developer).await;
        versions.sort();
        assert_eq!(versions, vec![1, 2, 3, 4, 5]);
    }
}
