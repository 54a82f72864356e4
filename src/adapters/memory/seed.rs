//! Default catalog content.
//!
//! Loads the standard five competency dimensions and four comment templates
//! into the in-memory stores. Seeding is skipped when the catalog already
//! holds dimensions.

use rust_decimal::Decimal;
use tracing::info;

use super::{InMemoryCommentTemplates, InMemoryDimensionCatalog};
use crate::domain::dimension::DimensionDefinition;
use crate::domain::feedback::CommentTemplate;
use crate::domain::foundation::{CommentTemplateId, DimensionId, DomainError};

/// (name, description, weight in tenths)
const DEFAULT_DIMENSIONS: [(&str, &str, i64); 5] = [
    (
        "Technical Excellence",
        "Mastery of programming languages, frameworks, architecture patterns, and technical problem-solving capabilities",
        250,
    ),
    (
        "Communication & Collaboration",
        "Effectiveness in verbal, written, and cross-functional communication with technical and non-technical stakeholders",
        200,
    ),
    (
        "Team Dynamics & Leadership",
        "Contribution to team culture, mentoring capabilities, and collaborative problem-solving",
        200,
    ),
    (
        "Execution & Results",
        "Consistent delivery of high-quality work within timelines and business requirements",
        200,
    ),
    (
        "Growth & Innovation",
        "Ability to learn, adapt to change, and drive innovation in dynamic environments",
        150,
    ),
];

const DEFAULT_TEMPLATE_TITLES: [&str; 4] = [
    "Key Strengths & Achievements",
    "Development Opportunities",
    "Development Goals & Action Plan",
    "Overall Performance Summary",
];

/// What a seeding run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub dimensions_created: usize,
    pub templates_created: usize,
    pub skipped: bool,
}

pub fn default_dimensions() -> Result<Vec<DimensionDefinition>, DomainError> {
    DEFAULT_DIMENSIONS
        .iter()
        .map(|(name, description, tenths)| {
            DimensionDefinition::new(DimensionId::new(), *name, *description, Decimal::new(*tenths, 1))
                .map_err(DomainError::from)
        })
        .collect()
}

pub fn default_templates() -> Result<Vec<CommentTemplate>, DomainError> {
    DEFAULT_TEMPLATE_TITLES
        .iter()
        .map(|title| {
            CommentTemplate::new(CommentTemplateId::new(), *title, "").map_err(DomainError::from)
        })
        .collect()
}

/// Seeds both stores unless the catalog is already populated.
///
/// Templates whose title already exists are not duplicated.
pub async fn seed_defaults(
    catalog: &InMemoryDimensionCatalog,
    templates: &InMemoryCommentTemplates,
) -> Result<SeedReport, DomainError> {
    if !catalog.is_empty().await {
        info!("Catalog already populated, skipping seed");
        return Ok(SeedReport {
            skipped: true,
            ..SeedReport::default()
        });
    }

    let mut report = SeedReport::default();
    for dimension in default_dimensions()? {
        info!(dimension = %dimension.name(), weight = %dimension.weight(), "Seeding dimension");
        catalog.insert(dimension).await;
        report.dimensions_created += 1;
    }
    for template in default_templates()? {
        if templates.find_by_title(template.title()).await.is_some() {
            continue;
        }
        info!(title = %template.title(), "Seeding comment template");
        templates.insert(template).await;
        report.templates_created += 1;
    }

    Ok(report)
}
