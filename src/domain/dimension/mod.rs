//! Dimension domain module.
//!
//! Dimensions are owned by the catalog and referenced by id everywhere else.

mod definition;
mod key;

pub use definition::DimensionDefinition;
pub use key::normalize_dimension_key;
