use super::super::catalog::{FraudCategory, IndicatorCatalog, IndicatorDefinition};
use super::super::domain::{CaseRecord, DetectedIndicator};

/// Placeholder evidence when the caller supplied none for a fraud indicator.
const GENERIC_EVIDENCE: &str = "Detected in analysis";
/// Fixed evidence text attached to detected mitigating indicators.
const MITIGATING_EVIDENCE: &str = "Mitigating factor detected";

/// Raw scoring output for one record, before tiering and classification.
///
/// Weight sums are accumulated in integer hundredths of a weight unit.
/// Catalog weights are tuned two-decimal constants, and assessments must be
/// bit-for-bit reproducible for audit, so boundary comparisons (a normalized
/// score landing exactly on 0.6, say) cannot be allowed to pick up float
/// accumulation drift.
pub(crate) struct ScoreSignals {
    pub(crate) matched: Option<FraudCategory>,
    /// Normalized fraud score of the matched category, already capped at 1.0.
    pub(crate) fraud_score: f64,
    /// Summed absolute mitigating weight, in hundredths.
    pub(crate) error_centi: i64,
    pub(crate) indicators: Vec<DetectedIndicator>,
}

impl ScoreSignals {
    /// Mitigating evidence offsets the fraud score at half its nominal
    /// weight. Each division here is a single correctly-rounded operation on
    /// exact integers, so the result is identical on every platform.
    pub(crate) fn final_score(&self) -> f64 {
        (self.fraud_score - self.error_centi as f64 / 200.0).clamp(0.0, 1.0)
    }
}

/// Scan the catalog against one record.
///
/// Categories are scanned in declaration order and the strictly greatest raw
/// weight sum wins, so the first-declared category keeps ties. The winning
/// category's raw sum is normalized by its declared indicator count and
/// capped at 1.0. Mitigating indicators are not category-scoped; each
/// detected one appends to the indicator list and contributes the absolute
/// value of its weight to the error score.
pub(crate) fn score_record(record: &CaseRecord, catalog: &IndicatorCatalog) -> ScoreSignals {
    let mut matched = None;
    let mut fraud_score = 0.0;
    let mut max_type_centi = 0i64;
    let mut indicators = Vec::new();

    for entry in catalog.categories() {
        let mut type_centi = 0i64;
        let mut type_indicators = Vec::new();

        for definition in &entry.indicators {
            if record.is_flagged(&definition.key) {
                type_indicators.push(detect(definition, record));
                type_centi += centi_weight(definition.weight);
            }
        }

        if type_centi > max_type_centi {
            max_type_centi = type_centi;
            matched = Some(entry.category);
            indicators = type_indicators;
            // The catalog constructor guarantees a non-empty indicator list.
            fraud_score =
                (type_centi as f64 / (entry.indicators.len() as i64 * 100) as f64).min(1.0);
        }
    }

    let mut error_centi = 0i64;
    for definition in catalog.mitigating() {
        if record.is_flagged(&definition.key) {
            indicators.push(DetectedIndicator {
                key: definition.key.clone(),
                description: definition.description.clone(),
                weight: definition.weight,
                detected: true,
                evidence: MITIGATING_EVIDENCE.to_string(),
            });
            error_centi += centi_weight(definition.weight).abs();
        }
    }

    ScoreSignals {
        matched,
        fraud_score,
        error_centi,
        indicators,
    }
}

fn centi_weight(weight: f64) -> i64 {
    (weight * 100.0).round() as i64
}

fn detect(definition: &IndicatorDefinition, record: &CaseRecord) -> DetectedIndicator {
    let evidence = record
        .evidence_for(&definition.key)
        .unwrap_or(GENERIC_EVIDENCE)
        .to_string();

    DetectedIndicator {
        key: definition.key.clone(),
        description: definition.description.clone(),
        weight: definition.weight,
        detected: true,
        evidence,
    }
}
