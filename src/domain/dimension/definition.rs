//! Competency dimension definition.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DimensionId, ValidationError};

/// A named, weighted competency axis.
///
/// # Invariants
///
/// - `name` is non-blank
/// - `weight` is within `[0, 100]`; zero is allowed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionDefinition {
    id: DimensionId,
    name: String,
    description: String,
    weight: Decimal,
}

impl DimensionDefinition {
    /// Creates a validated dimension.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    /// - `InvalidFormat` if the weight is negative or above 100
    pub fn new(
        id: DimensionId,
        name: impl Into<String>,
        description: impl Into<String>,
        weight: Decimal,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if weight < Decimal::ZERO || weight > Decimal::ONE_HUNDRED {
            return Err(ValidationError::invalid_format(
                "weight",
                format!("must be between 0 and 100, got {}", weight),
            ));
        }

        Ok(Self {
            id,
            name,
            description: description.into(),
            weight,
        })
    }

    pub fn id(&self) -> DimensionId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn weight(&self) -> Decimal {
        self.weight
    }

    /// Normalized key used by downstream analysis.
    pub fn key(&self) -> String {
        super::normalize_dimension_key(&self.name)
    }
}
