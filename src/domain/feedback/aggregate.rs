//! Feedback aggregate.
//!
//! A feedback record is a header (manager, developer, version) plus two kinds
//! of child entries: per-dimension ratings with a comment, and answers to
//! comment templates. `CompleteFeedback` is the header with its entries.

use serde::{Deserialize, Serialize};

use super::{FeedbackError, FeedbackVersion};
use crate::domain::foundation::{
    CommentTemplateId, DimensionId, FeedbackCommentId, FeedbackDimensionId, FeedbackId, Rating,
    Timestamp, UserId,
};

/// Caller input for one rated dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackDimensionInput {
    pub dimension_id: DimensionId,
    pub rating: Rating,
    #[serde(default)]
    pub comment: String,
}

/// Caller input for one template answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackCommentInput {
    pub template_id: CommentTemplateId,
    pub body: String,
}

/// A persisted per-dimension rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackDimensionEntry {
    pub id: FeedbackDimensionId,
    pub feedback_id: FeedbackId,
    pub dimension_id: DimensionId,
    pub rating: Rating,
    pub comment: String,
    pub created_at: Timestamp,
}

impl FeedbackDimensionEntry {
    pub fn new(feedback_id: FeedbackId, input: FeedbackDimensionInput, now: Timestamp) -> Self {
        Self {
            id: FeedbackDimensionId::new(),
            feedback_id,
            dimension_id: input.dimension_id,
            rating: input.rating,
            comment: input.comment,
            created_at: now,
        }
    }
}

/// A persisted template answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackCommentEntry {
    pub id: FeedbackCommentId,
    pub feedback_id: FeedbackId,
    pub template_id: CommentTemplateId,
    pub body: String,
}

impl FeedbackCommentEntry {
    pub fn new(feedback_id: FeedbackId, input: FeedbackCommentInput) -> Self {
        Self {
            id: FeedbackCommentId::new(),
            feedback_id,
            template_id: input.template_id,
            body: input.body,
        }
    }
}

/// Feedback header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    id: FeedbackId,
    manager_id: UserId,
    developer_id: UserId,
    version: FeedbackVersion,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Feedback {
    pub fn new(
        id: FeedbackId,
        manager_id: UserId,
        developer_id: UserId,
        version: FeedbackVersion,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            manager_id,
            developer_id,
            version,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute a header from persistence.
    pub fn reconstitute(
        id: FeedbackId,
        manager_id: UserId,
        developer_id: UserId,
        version: FeedbackVersion,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            manager_id,
            developer_id,
            version,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> FeedbackId {
        self.id
    }

    pub fn manager_id(&self) -> UserId {
        self.manager_id
    }

    pub fn developer_id(&self) -> UserId {
        self.developer_id
    }

    pub fn version(&self) -> FeedbackVersion {
        self.version
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Replaces manager, developer and version. Child entries are untouched.
    pub fn reassign(
        &mut self,
        manager_id: UserId,
        developer_id: UserId,
        version: FeedbackVersion,
        now: Timestamp,
    ) {
        self.manager_id = manager_id;
        self.developer_id = developer_id;
        self.version = version;
        self.updated_at = now;
    }
}

/// Header plus every child entry, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompleteFeedback {
    header: Feedback,
    dimensions: Vec<FeedbackDimensionEntry>,
    comments: Vec<FeedbackCommentEntry>,
}

impl CompleteFeedback {
    pub fn new(header: Feedback) -> Self {
        Self {
            header,
            dimensions: Vec::new(),
            comments: Vec::new(),
        }
    }

    pub fn from_parts(
        header: Feedback,
        dimensions: Vec<FeedbackDimensionEntry>,
        comments: Vec<FeedbackCommentEntry>,
    ) -> Self {
        Self {
            header,
            dimensions,
            comments,
        }
    }

    /// Adds a dimension entry.
    ///
    /// # Errors
    ///
    /// `DuplicateDimension` if this feedback already rates the dimension.
    pub fn add_dimension(&mut self, input: FeedbackDimensionInput, now: Timestamp) -> Result<(), FeedbackError> {
        if self.rates(input.dimension_id) {
            return Err(FeedbackError::DuplicateDimension {
                feedback_id: self.header.id(),
                dimension_id: input.dimension_id,
            });
        }
        let entry = FeedbackDimensionEntry::new(self.header.id(), input, now);
        self.dimensions.push(entry);
        Ok(())
    }

    pub fn add_comment(&mut self, input: FeedbackCommentInput) {
        let entry = FeedbackCommentEntry::new(self.header.id(), input);
        self.comments.push(entry);
    }

    pub fn rates(&self, dimension_id: DimensionId) -> bool {
        self.dimensions.iter().any(|d| d.dimension_id == dimension_id)
    }

    pub fn header(&self) -> &Feedback {
        &self.header
    }

    pub fn id(&self) -> FeedbackId {
        self.header.id()
    }

    pub fn dimensions(&self) -> &[FeedbackDimensionEntry] {
        &self.dimensions
    }

    pub fn comments(&self) -> &[FeedbackCommentEntry] {
        &self.comments
    }

    pub fn into_parts(self) -> (Feedback, Vec<FeedbackDimensionEntry>, Vec<FeedbackCommentEntry>) {
        (self.header, self.dimensions, self.comments)
    }
}
