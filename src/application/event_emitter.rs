//! Best-effort outbound event emission.
//!
//! Events are published after the write they describe has been persisted.
//! A failure to build or publish an event is logged and counted, never
//! returned: the caller's write stands either way.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error, warn};

use crate::domain::analysis::{AnalysisPayload, AnalysisSubmitted};
use crate::domain::assessment::{Assessment, AssessmentEvent};
use crate::domain::feedback::{Feedback, FeedbackEvent};
use crate::domain::foundation::{DomainEvent, EventEnvelope, EventKind, UserId, EVENT_SOURCE};
use crate::domain::user::UserContext;
use crate::ports::{EventPublisher, UserDirectory};

/// Builds envelopes, enriches them with user identity and hands them to the publisher.
pub struct DomainEventEmitter {
    publisher: Arc<dyn EventPublisher>,
    users: Arc<dyn UserDirectory>,
    source: String,
    emitted: AtomicU64,
    failed: AtomicU64,
}

impl DomainEventEmitter {
    pub fn new(publisher: Arc<dyn EventPublisher>, users: Arc<dyn UserDirectory>) -> Self {
        Self {
            publisher,
            users,
            source: EVENT_SOURCE.to_string(),
            emitted: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        }
    }

    /// Overrides the `source` tag stamped on every envelope.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn emitted_count(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }

    pub fn failed_count(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    /// Resolves identity for `user_id`, falling back to the unknown-user placeholder.
    pub async fn user_context(&self, user_id: UserId) -> UserContext {
        match self.users.find_user_context(&user_id).await {
            Ok(Some(context)) => context,
            Ok(None) => {
                warn!(user_id = %user_id, "No user snapshot found, using placeholder identity");
                UserContext::unknown(user_id)
            }
            Err(err) => {
                warn!(user_id = %user_id, error = %err, "User lookup failed, using placeholder identity");
                UserContext::unknown(user_id)
            }
        }
    }

    pub async fn assessment_submitted(&self, assessment: &Assessment) {
        let context = self.user_context(assessment.user_id()).await;
        self.emit(&AssessmentEvent::submitted(assessment, context)).await;
    }

    pub async fn assessment_updated(&self, assessment: &Assessment) {
        let context = self.user_context(assessment.user_id()).await;
        self.emit(&AssessmentEvent::updated(assessment, context)).await;
    }

    /// Emits a feedback lifecycle event of `kind` carrying both user contexts.
    pub async fn feedback(&self, kind: EventKind, feedback: &Feedback) {
        let manager = self.user_context(feedback.manager_id()).await;
        let developer = self.user_context(feedback.developer_id()).await;
        self.emit(&FeedbackEvent::new(kind, feedback, manager, developer))
            .await;
    }

    pub async fn analysis_submitted(&self, feedback: &Feedback, payload: AnalysisPayload) {
        self.emit(&AnalysisSubmitted::new(feedback.id(), payload)).await;
    }

    /// Serializes and publishes one event. Returns whether it was accepted.
    pub async fn emit<E>(&self, event: &E) -> bool
    where
        E: DomainEvent + Serialize,
    {
        let kind = event.event_kind();
        let aggregate_id = event.aggregate_id();

        let envelope = match EventEnvelope::from_event(event) {
            Ok(envelope) => envelope.with_source(self.source.clone()),
            Err(err) => {
                self.failed.fetch_add(1, Ordering::Relaxed);
                error!(event_kind = %kind, aggregate_id = %aggregate_id, error = %err, "Failed to serialize event");
                return false;
            }
        };

        match self.publisher.publish(envelope).await {
            Ok(()) => {
                self.emitted.fetch_add(1, Ordering::Relaxed);
                debug!(event_kind = %kind, routing_key = kind.routing_key(), aggregate_id = %aggregate_id, "Event published");
                true
            }
            Err(err) => {
                self.failed.fetch_add(1, Ordering::Relaxed);
                error!(event_kind = %kind, aggregate_id = %aggregate_id, error = %err, "Failed to publish event");
                false
            }
        }
    }
}
