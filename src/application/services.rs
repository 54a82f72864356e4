//! Shared dependencies and handler factories.

use std::sync::Arc;

use super::handlers::{
    AddFeedbackCommentHandler, AddFeedbackDimensionHandler, AnalysisPayloadBuilder,
    ApplyUserEventHandler, AssignDeveloperHandler, CreateAssessmentHandler,
    CreateCompleteFeedbackHandler, CreateFeedbackVersionHandler, DeleteFeedbackHandler,
    FeedbackQueryHandler, GetAssessmentHandler, GetFeedbackHandler, ListUserAssessmentsHandler,
    PairFeedbackHandler, SubmissionGuard, UpdateAssessmentHandler, UpdateFeedbackHandler,
};
use super::{DomainEventEmitter, KeyedLocks, PairKey};
use crate::domain::foundation::UserId;
use crate::ports::{
    AssessmentRepository, CommentTemplateRepository, DimensionCatalog, EventPublisher,
    FeedbackRepository, UserDirectory,
};

/// Every port the service needs, plus the state handlers must share.
///
/// Handlers built from the same `AssessmentServices` (or its clones) share
/// one emitter and one set of per-key locks.
#[derive(Clone)]
pub struct AssessmentServices {
    pub catalog: Arc<dyn DimensionCatalog>,
    pub templates: Arc<dyn CommentTemplateRepository>,
    pub assessments: Arc<dyn AssessmentRepository>,
    pub feedback: Arc<dyn FeedbackRepository>,
    pub users: Arc<dyn UserDirectory>,
    pub emitter: Arc<DomainEventEmitter>,
    user_locks: Arc<KeyedLocks<UserId>>,
    pair_locks: Arc<KeyedLocks<PairKey>>,
}

impl AssessmentServices {
    pub fn new(
        catalog: Arc<dyn DimensionCatalog>,
        templates: Arc<dyn CommentTemplateRepository>,
        assessments: Arc<dyn AssessmentRepository>,
        feedback: Arc<dyn FeedbackRepository>,
        users: Arc<dyn UserDirectory>,
        publisher: Arc<dyn EventPublisher>,
        event_source: impl Into<String>,
    ) -> Self {
        let emitter = DomainEventEmitter::new(publisher, users.clone()).with_source(event_source);
        Self {
            catalog,
            templates,
            assessments,
            feedback,
            users,
            emitter: Arc::new(emitter),
            user_locks: Arc::new(KeyedLocks::new()),
            pair_locks: Arc::new(KeyedLocks::new()),
        }
    }

    // Assessments

    pub fn submission_guard(&self) -> SubmissionGuard {
        SubmissionGuard::new(self.assessments.clone())
    }

    pub fn create_assessment_handler(&self) -> CreateAssessmentHandler {
        CreateAssessmentHandler::new(
            self.assessments.clone(),
            self.catalog.clone(),
            self.emitter.clone(),
            self.user_locks.clone(),
        )
    }

    pub fn update_assessment_handler(&self) -> UpdateAssessmentHandler {
        UpdateAssessmentHandler::new(
            self.assessments.clone(),
            self.emitter.clone(),
            self.user_locks.clone(),
        )
    }

    pub fn get_assessment_handler(&self) -> GetAssessmentHandler {
        GetAssessmentHandler::new(self.assessments.clone())
    }

    pub fn list_user_assessments_handler(&self) -> ListUserAssessmentsHandler {
        ListUserAssessmentsHandler::new(self.assessments.clone())
    }

    // Feedback

    pub fn analysis_payload_builder(&self) -> AnalysisPayloadBuilder {
        AnalysisPayloadBuilder::new(
            self.assessments.clone(),
            self.feedback.clone(),
            self.catalog.clone(),
            self.templates.clone(),
        )
    }

    pub fn create_complete_feedback_handler(&self) -> CreateCompleteFeedbackHandler {
        CreateCompleteFeedbackHandler::new(
            self.feedback.clone(),
            self.catalog.clone(),
            self.templates.clone(),
            Arc::new(self.analysis_payload_builder()),
            self.emitter.clone(),
            self.pair_locks.clone(),
        )
    }

    pub fn create_feedback_version_handler(&self) -> CreateFeedbackVersionHandler {
        CreateFeedbackVersionHandler::new(
            self.feedback.clone(),
            self.emitter.clone(),
            self.pair_locks.clone(),
        )
    }

    pub fn update_feedback_handler(&self) -> UpdateFeedbackHandler {
        UpdateFeedbackHandler::new(
            self.feedback.clone(),
            self.emitter.clone(),
            self.pair_locks.clone(),
        )
    }

    pub fn delete_feedback_handler(&self) -> DeleteFeedbackHandler {
        DeleteFeedbackHandler::new(self.feedback.clone(), self.emitter.clone())
    }

    pub fn add_feedback_dimension_handler(&self) -> AddFeedbackDimensionHandler {
        AddFeedbackDimensionHandler::new(self.feedback.clone(), self.catalog.clone())
    }

    pub fn add_feedback_comment_handler(&self) -> AddFeedbackCommentHandler {
        AddFeedbackCommentHandler::new(self.feedback.clone(), self.templates.clone())
    }

    pub fn get_feedback_handler(&self) -> GetFeedbackHandler {
        GetFeedbackHandler::new(self.feedback.clone())
    }

    pub fn pair_feedback_handler(&self) -> PairFeedbackHandler {
        PairFeedbackHandler::new(self.feedback.clone())
    }

    pub fn feedback_query_handler(&self) -> FeedbackQueryHandler {
        FeedbackQueryHandler::new(self.feedback.clone())
    }

    // Users

    pub fn apply_user_event_handler(&self) -> ApplyUserEventHandler {
        ApplyUserEventHandler::new(self.users.clone())
    }

    pub fn assign_developer_handler(&self) -> AssignDeveloperHandler {
        AssignDeveloperHandler::new(self.users.clone())
    }
}
