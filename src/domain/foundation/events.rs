//! Event infrastructure for domain event publishing.
//!
//! This module provides the core types for the best-effort event side channel:
//! - `EventKind` - The closed set of events this service emits
//! - `EventId` - Unique identifier for each emission
//! - `EventEnvelope` - Transport wrapper for domain events
//! - `DomainEvent` - Trait that all domain events implement
//! - `domain_event!` - Macro to simplify DomainEvent implementations

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use uuid::Uuid;

use super::Timestamp;

/// Source tag stamped on every envelope unless overridden by configuration.
pub const EVENT_SOURCE: &str = "assessment-service";

// ============================================
// EventKind
// ============================================

/// Every event kind this service produces.
///
/// Serialized as `SCREAMING_SNAKE_CASE` (`"ASSESSMENT_SUBMITTED"`), which is
/// the form downstream consumers switch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    AssessmentSubmitted,
    AssessmentUpdated,
    FeedbackCreated,
    FeedbackUpdated,
    FeedbackDeleted,
    FeedbackVersionCreated,
    AnalysisSubmitted,
}

impl EventKind {
    /// All kinds, in declaration order.
    pub const ALL: [EventKind; 7] = [
        EventKind::AssessmentSubmitted,
        EventKind::AssessmentUpdated,
        EventKind::FeedbackCreated,
        EventKind::FeedbackUpdated,
        EventKind::FeedbackDeleted,
        EventKind::FeedbackVersionCreated,
        EventKind::AnalysisSubmitted,
    ];

    /// Routing key used by transports to fan events out to consumers.
    pub fn routing_key(&self) -> &'static str {
        match self {
            EventKind::AssessmentSubmitted => "assessment.submitted",
            EventKind::AssessmentUpdated => "assessment.updated",
            EventKind::FeedbackCreated => "feedback.created",
            EventKind::FeedbackUpdated => "feedback.updated",
            EventKind::FeedbackDeleted => "feedback.deleted",
            EventKind::FeedbackVersionCreated => "feedback.version.created",
            EventKind::AnalysisSubmitted => "feedback.submitted",
        }
    }

    /// Returns the wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::AssessmentSubmitted => "ASSESSMENT_SUBMITTED",
            EventKind::AssessmentUpdated => "ASSESSMENT_UPDATED",
            EventKind::FeedbackCreated => "FEEDBACK_CREATED",
            EventKind::FeedbackUpdated => "FEEDBACK_UPDATED",
            EventKind::FeedbackDeleted => "FEEDBACK_DELETED",
            EventKind::FeedbackVersionCreated => "FEEDBACK_VERSION_CREATED",
            EventKind::AnalysisSubmitted => "ANALYSIS_SUBMITTED",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================
// DomainEvent Trait
// ============================================

/// Trait that all domain events must implement.
///
/// Use the `domain_event!` macro to implement this trait with minimal boilerplate.
pub trait DomainEvent: Send + Sync {
    /// Returns the kind of this event.
    fn event_kind(&self) -> EventKind;

    /// Returns the ID of the entity the event is about.
    fn aggregate_id(&self) -> String;

    /// Returns the type of entity (e.g., "Assessment", "Feedback").
    fn aggregate_type(&self) -> &'static str;

    /// Returns when the event was produced.
    fn occurred_at(&self) -> Timestamp;

    /// Returns the unique ID for this event instance.
    fn event_id(&self) -> EventId;
}

/// Macro to implement DomainEvent trait with minimal boilerplate.
///
/// The kind is either read from a field (`kind_field = ...`, for event structs
/// shared by several kinds) or fixed (`kind = ...`).
///
/// # Example
///
/// ```ignore
/// domain_event!(
///     AssessmentEvent,
///     kind_field = event_kind,
///     aggregate_id = assessment_id,
///     aggregate_type = "Assessment",
///     occurred_at = occurred_at,
///     event_id = event_id
/// );
/// ```
#[macro_export]
macro_rules! domain_event {
    (
        $event_name:ident,
        kind_field = $kind_field:ident,
        aggregate_id = $agg_id_field:ident,
        aggregate_type = $agg_type:expr,
        occurred_at = $occurred_field:ident,
        event_id = $event_id_field:ident
    ) => {
        impl $crate::domain::foundation::DomainEvent for $event_name {
            fn event_kind(&self) -> $crate::domain::foundation::EventKind {
                self.$kind_field
            }

            $crate::domain_event!(@common $agg_id_field, $agg_type, $occurred_field, $event_id_field);
        }
    };
    (
        $event_name:ident,
        kind = $kind:expr,
        aggregate_id = $agg_id_field:ident,
        aggregate_type = $agg_type:expr,
        occurred_at = $occurred_field:ident,
        event_id = $event_id_field:ident
    ) => {
        impl $crate::domain::foundation::DomainEvent for $event_name {
            fn event_kind(&self) -> $crate::domain::foundation::EventKind {
                $kind
            }

            $crate::domain_event!(@common $agg_id_field, $agg_type, $occurred_field, $event_id_field);
        }
    };
    (@common $agg_id_field:ident, $agg_type:expr, $occurred_field:ident, $event_id_field:ident) => {
        fn aggregate_id(&self) -> String {
            self.$agg_id_field.to_string()
        }

        fn aggregate_type(&self) -> &'static str {
            $agg_type
        }

        fn occurred_at(&self) -> $crate::domain::foundation::Timestamp {
            self.$occurred_field
        }

        fn event_id(&self) -> $crate::domain::foundation::EventId {
            self.$event_id_field.clone()
        }
    };
}

// Re-export the macro
pub use domain_event;

/// Unique identifier for events (used for deduplication downstream).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Creates a new random EventId using UUID v4.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Creates an EventId from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transport envelope for domain events.
///
/// Wraps event-specific data with the fields every consumer relies on:
/// - Routing (event_kind)
/// - Deduplication (event_id)
/// - Provenance (source)
/// - Correlation (aggregate_id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventEnvelope {
    /// Unique ID for this emission.
    pub event_id: EventId,

    /// What happened.
    pub event_kind: EventKind,

    /// Service that produced the event.
    pub source: String,

    /// When the event was published.
    #[serde(rename = "timestamp")]
    pub occurred_at: Timestamp,

    /// ID of the entity the event is about.
    pub aggregate_id: String,

    /// Type of entity (e.g., "Assessment", "Feedback").
    pub aggregate_type: String,

    /// Event-specific payload as JSON.
    pub payload: JsonValue,
}

impl EventEnvelope {
    /// Creates a new EventEnvelope stamped with a fresh id and the current time.
    pub fn new(
        event_kind: EventKind,
        aggregate_id: impl Into<String>,
        aggregate_type: impl Into<String>,
        payload: JsonValue,
    ) -> Self {
        Self {
            event_id: EventId::new(),
            event_kind,
            source: EVENT_SOURCE.to_string(),
            occurred_at: Timestamp::now(),
            aggregate_id: aggregate_id.into(),
            aggregate_type: aggregate_type.into(),
            payload,
        }
    }

    /// Creates an envelope from a domain event.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if the event cannot be turned into JSON.
    pub fn from_event<T>(event: &T) -> Result<Self, serde_json::Error>
    where
        T: DomainEvent + Serialize,
    {
        Ok(Self {
            event_id: event.event_id(),
            event_kind: event.event_kind(),
            source: EVENT_SOURCE.to_string(),
            occurred_at: event.occurred_at(),
            aggregate_id: event.aggregate_id(),
            aggregate_type: event.aggregate_type().to_string(),
            payload: serde_json::to_value(event)?,
        })
    }

    /// Override the source tag.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Deserialize payload to a specific event type.
    pub fn payload_as<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }
}
