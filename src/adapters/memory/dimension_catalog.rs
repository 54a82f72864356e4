//! In-memory dimension catalog.
//!
//! Backs the `DimensionCatalog` port for tests and the dev harness. Also
//! exposes write helpers the seed loader uses.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

use crate::domain::dimension::DimensionDefinition;
use crate::domain::foundation::{DimensionId, DomainError};
use crate::ports::DimensionCatalog;

/// In-memory implementation of the DimensionCatalog port.
#[derive(Default)]
pub struct InMemoryDimensionCatalog {
    dimensions: RwLock<HashMap<DimensionId, DimensionDefinition>>,
}

impl InMemoryDimensionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a dimension.
    pub async fn insert(&self, dimension: DimensionDefinition) {
        self.dimensions
            .write()
            .await
            .insert(dimension.id(), dimension);
    }

    /// Removes a dimension. Returns it if it was present.
    pub async fn remove(&self, id: &DimensionId) -> Option<DimensionDefinition> {
        self.dimensions.write().await.remove(id)
    }

    pub async fn len(&self) -> usize {
        self.dimensions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.dimensions.read().await.is_empty()
    }
}

#[async_trait]
impl DimensionCatalog for InMemoryDimensionCatalog {
    async fn find_by_id(&self, id: &DimensionId) -> Result<Option<DimensionDefinition>, DomainError> {
        Ok(self.dimensions.read().await.get(id).cloned())
    }

    async fn existing_ids(&self, ids: &[DimensionId]) -> Result<Vec<DimensionId>, DomainError> {
        let dimensions = self.dimensions.read().await;
        let unique: HashSet<&DimensionId> = ids.iter().collect();
        Ok(unique
            .into_iter()
            .filter(|id| dimensions.contains_key(id))
            .copied()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<DimensionDefinition>, DomainError> {
        let mut all: Vec<DimensionDefinition> =
            self.dimensions.read().await.values().cloned().collect();
        all.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(all)
    }
}
