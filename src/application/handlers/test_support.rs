//! Shared wiring for handler tests.

use std::sync::Arc;

use crate::adapters::memory::{
    seed_defaults, InMemoryAssessmentRepository, InMemoryCommentTemplates,
    InMemoryDimensionCatalog, InMemoryFeedbackRepository, InMemoryUserDirectory,
};
use crate::adapters::InMemoryEventBus;
use crate::application::{DomainEventEmitter, KeyedLocks, PairKey};
use crate::domain::dimension::DimensionDefinition;
use crate::domain::feedback::CommentTemplate;
use crate::domain::foundation::UserId;
use crate::ports::DimensionCatalog;

pub(crate) struct Harness {
    pub catalog: Arc<InMemoryDimensionCatalog>,
    pub templates: Arc<InMemoryCommentTemplates>,
    pub assessments: Arc<InMemoryAssessmentRepository>,
    pub feedback: Arc<InMemoryFeedbackRepository>,
    pub users: Arc<InMemoryUserDirectory>,
    pub bus: Arc<InMemoryEventBus>,
    pub emitter: Arc<DomainEventEmitter>,
    pub user_locks: Arc<KeyedLocks<UserId>>,
    pub pair_locks: Arc<KeyedLocks<PairKey>>,
}

impl Harness {
    /// In-memory stores with the default dimensions and templates loaded.
    pub async fn seeded() -> Self {
        let catalog = Arc::new(InMemoryDimensionCatalog::new());
        let templates = Arc::new(InMemoryCommentTemplates::new());
        seed_defaults(&catalog, &templates).await.unwrap();

        let users = Arc::new(InMemoryUserDirectory::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let emitter = Arc::new(DomainEventEmitter::new(bus.clone(), users.clone()));

        Self {
            catalog,
            templates,
            assessments: Arc::new(InMemoryAssessmentRepository::new()),
            feedback: Arc::new(InMemoryFeedbackRepository::new()),
            users,
            bus,
            emitter,
            user_locks: Arc::new(KeyedLocks::new()),
            pair_locks: Arc::new(KeyedLocks::new()),
        }
    }

    pub async fn dimension(&self, name: &str) -> DimensionDefinition {
        self.catalog
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .find(|d| d.name() == name)
            .unwrap()
    }

    pub async fn template(&self, title: &str) -> CommentTemplate {
        self.templates.find_by_title(title).await.unwrap()
    }
}
