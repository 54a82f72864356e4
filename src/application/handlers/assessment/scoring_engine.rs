//! Weighted scoring of rated dimensions against the catalog.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::assessment::{AssessmentError, RatedDimension};
use crate::domain::foundation::DimensionId;
use crate::domain::scoring::{ScoreAccumulator, WeightedRating};
use crate::ports::DimensionCatalog;

/// Resolves dimension weights and computes the rounded weighted average.
pub struct ScoringEngine {
    catalog: Arc<dyn DimensionCatalog>,
}

impl ScoringEngine {
    pub fn new(catalog: Arc<dyn DimensionCatalog>) -> Self {
        Self { catalog }
    }

    /// Fails with `InvalidDimensionIds` unless every id is in the catalog.
    pub async fn verify_known(&self, ids: &[DimensionId]) -> Result<(), AssessmentError> {
        let mut requested = ids.to_vec();
        requested.sort();
        requested.dedup();

        let existing = self.catalog.existing_ids(&requested).await?;
        if existing.len() != requested.len() {
            warn!(
                requested = requested.len(),
                found = existing.len(),
                "Rejected assessment with unknown dimension ids"
            );
            return Err(AssessmentError::InvalidDimensionIds);
        }
        Ok(())
    }

    /// Weighted average of `ratings`, rounded half away from zero.
    ///
    /// Returns 0 when every weight is zero.
    pub async fn weighted_average(&self, ratings: &[RatedDimension]) -> Result<i32, AssessmentError> {
        let mut accumulator = ScoreAccumulator::new();

        for rated in ratings {
            let dimension = self
                .catalog
                .find_by_id(&rated.dimension_id)
                .await?
                .ok_or(AssessmentError::DimensionNotFound(rated.dimension_id))?;

            debug!(
                dimension = %dimension.name(),
                weight = %dimension.weight(),
                rating = rated.rating.value(),
                "Scoring dimension"
            );
            accumulator.add(WeightedRating::new(rated.rating, dimension.weight()));
        }

        if accumulator.total_weight().is_zero() {
            warn!(dimensions = ratings.len(), "Total dimension weight is zero, score defaults to 0");
        }

        let score = accumulator.finish();
        debug!(
            weighted_sum = %accumulator.weighted_sum(),
            total_weight = %accumulator.total_weight(),
            score,
            "Weighted average computed"
        );
        Ok(score)
    }
}
