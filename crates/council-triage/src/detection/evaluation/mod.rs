mod config;
pub(crate) mod policy;
pub(crate) mod rules;

pub use config::EvaluationConfig;

use super::batch::{BatchOutcome, BatchStatistics};
use super::catalog::IndicatorCatalog;
use super::domain::{Assessment, CaseRecord, RiskLevel};

/// Confidence is capped strictly below certainty; it is a completeness
/// heuristic, not a calibrated probability.
const MAX_CONFIDENCE: f64 = 0.95;

/// Stateless evaluator applying an immutable indicator catalog to case
/// records.
///
/// Every call is a bounded, synchronous, side-effect-free computation, so a
/// single evaluator can be shared across threads behind an `Arc` without
/// synchronization.
pub struct CaseEvaluator {
    catalog: IndicatorCatalog,
    config: EvaluationConfig,
}

impl CaseEvaluator {
    pub fn new(catalog: IndicatorCatalog) -> Self {
        Self::with_config(catalog, EvaluationConfig::default())
    }

    pub fn with_config(catalog: IndicatorCatalog, config: EvaluationConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &IndicatorCatalog {
        &self.catalog
    }

    /// Score and classify one case record.
    ///
    /// Deterministic and total: absent keys read as `false`, a missing case
    /// identifier falls back to the `UNKNOWN` sentinel, and the final score
    /// is clamped into [0, 1] before tiering.
    pub fn assess(&self, record: &CaseRecord) -> Assessment {
        let signals = rules::score_record(record, &self.catalog);
        let final_score = signals.final_score();

        let risk_level = RiskLevel::from_score(final_score);
        let (is_likely_fraud, is_likely_error) =
            policy::classify(final_score, signals.error_centi);

        let recommendations = policy::recommendations_for(
            signals.matched,
            risk_level,
            is_likely_fraud,
            is_likely_error,
            &self.config,
        );

        let confidence =
            (signals.indicators.len() as f64 / 10.0 + final_score * 0.5).min(MAX_CONFIDENCE);

        Assessment {
            case_id: record.case_reference().to_string(),
            fraud_category: signals.matched,
            risk_level,
            risk_score: final_score,
            is_likely_fraud,
            is_likely_error,
            indicators: signals.indicators,
            recommendations,
            confidence,
        }
    }

    /// Assess a batch of records, preserving input order and accumulating
    /// summary statistics as each assessment is produced.
    pub fn assess_batch(&self, records: &[CaseRecord]) -> BatchOutcome {
        let mut statistics = BatchStatistics::default();
        let mut assessments = Vec::with_capacity(records.len());

        for record in records {
            let assessment = self.assess(record);
            statistics.record(&assessment);
            assessments.push(assessment);
        }

        BatchOutcome {
            assessments,
            statistics,
        }
    }
}
