//! Dimension catalog port (read side).
//!
//! The catalog owns dimension definitions. The core only reads from it.

use async_trait::async_trait;

use crate::domain::dimension::DimensionDefinition;
use crate::domain::foundation::{DimensionId, DomainError};

/// Read-only access to weighted competency dimensions.
#[async_trait]
pub trait DimensionCatalog: Send + Sync {
    /// Find a dimension by id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &DimensionId) -> Result<Option<DimensionDefinition>, DomainError>;

    /// Returns the subset of `ids` that exist, in any order.
    ///
    /// One round trip for the whole batch.
    async fn existing_ids(&self, ids: &[DimensionId]) -> Result<Vec<DimensionId>, DomainError>;

    /// Every dimension, ordered by name.
    async fn find_all(&self) -> Result<Vec<DimensionDefinition>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_catalog_is_object_safe() {
        fn _accepts_dyn(_catalog: &dyn DimensionCatalog) {}
    }
}
