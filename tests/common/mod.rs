//! Shared wiring for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use assessment_service::adapters::memory::{
    seed_defaults, InMemoryAssessmentRepository, InMemoryCommentTemplates,
    InMemoryDimensionCatalog, InMemoryFeedbackRepository, InMemoryUserDirectory,
};
use assessment_service::adapters::InMemoryEventBus;
use assessment_service::application::AssessmentServices;
use assessment_service::domain::assessment::RatedDimension;
use assessment_service::domain::feedback::{FeedbackCommentInput, FeedbackDimensionInput};
use assessment_service::domain::foundation::{CommentTemplateId, DimensionId, Rating};
use assessment_service::ports::{DimensionCatalog, UserDirectory};

pub struct TestApp {
    pub services: AssessmentServices,
    pub catalog: Arc<InMemoryDimensionCatalog>,
    pub templates: Arc<InMemoryCommentTemplates>,
    pub assessments: Arc<InMemoryAssessmentRepository>,
    pub feedback: Arc<InMemoryFeedbackRepository>,
    pub bus: Arc<InMemoryEventBus>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_users(Arc::new(InMemoryUserDirectory::new())).await
    }

    pub async fn with_users(users: Arc<dyn UserDirectory>) -> Self {
        let catalog = Arc::new(InMemoryDimensionCatalog::new());
        let templates = Arc::new(InMemoryCommentTemplates::new());
        seed_defaults(&catalog, &templates).await.unwrap();

        let assessments = Arc::new(InMemoryAssessmentRepository::new());
        let feedback = Arc::new(InMemoryFeedbackRepository::new());
        let bus = Arc::new(InMemoryEventBus::new());

        let services = AssessmentServices::new(
            catalog.clone(),
            templates.clone(),
            assessments.clone(),
            feedback.clone(),
            users,
            bus.clone(),
            "assessment-service",
        );

        Self {
            services,
            catalog,
            templates,
            assessments,
            feedback,
            bus,
        }
    }

    pub async fn dimension_id(&self, name: &str) -> DimensionId {
        self.catalog
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .find(|d| d.name() == name)
            .map(|d| d.id())
            .unwrap()
    }

    pub async fn template_id(&self, title: &str) -> CommentTemplateId {
        self.templates.find_by_title(title).await.unwrap().id()
    }

    pub async fn self_ratings(&self, pairs: &[(&str, i32)]) -> Vec<RatedDimension> {
        let mut out = Vec::new();
        for (name, rating) in pairs {
            out.push(RatedDimension::new(
                self.dimension_id(name).await,
                Rating::new(*rating).unwrap(),
            ));
        }
        out
    }

    pub async fn manager_ratings(&self, pairs: &[(&str, i32)]) -> Vec<FeedbackDimensionInput> {
        let mut out = Vec::new();
        for (name, rating) in pairs {
            out.push(FeedbackDimensionInput {
                dimension_id: self.dimension_id(name).await,
                rating: Rating::new(*rating).unwrap(),
                comment: String::new(),
            });
        }
        out
    }

    pub async fn comment(&self, title: &str, body: &str) -> FeedbackCommentInput {
        FeedbackCommentInput {
            template_id: self.template_id(title).await,
            body: body.to_string(),
        }
    }
}
