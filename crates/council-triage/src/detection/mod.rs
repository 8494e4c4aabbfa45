//! Council tax fraud triage: indicator catalog, case evaluation,
//! classification, recommendations, and batch aggregation.
//!
//! The engine is a deterministic function family over immutable
//! configuration. Given the same catalog and record it always produces the
//! same assessment, which the audit process depends on.

pub mod batch;
pub mod catalog;
pub mod domain;
pub(crate) mod evaluation;
pub mod importer;
pub mod router;

#[cfg(test)]
mod tests;

pub use batch::{BatchOutcome, BatchStatistics};
pub use catalog::{
    CatalogError, CategoryIndicators, FraudCategory, IndicatorCatalog, IndicatorDefinition,
};
pub use domain::{
    Assessment, CaseRecord, Classification, DetectedIndicator, RiskLevel, UNKNOWN_CASE_ID,
};
pub use evaluation::{CaseEvaluator, EvaluationConfig};
pub use importer::{CaseCsvImporter, CaseImportError};
pub use router::assessment_router;
