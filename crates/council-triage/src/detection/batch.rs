use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::Assessment;

/// Summary counters accumulated over one batch run.
///
/// `by_category` tallies matched categories only; a record contributes to at
/// most one entry, and categories that never matched are absent. Consumers
/// must treat the tally as unordered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchStatistics {
    pub total_cases: usize,
    pub high_risk: usize,
    pub likely_fraud: usize,
    pub likely_error: usize,
    pub by_category: BTreeMap<String, usize>,
}

impl BatchStatistics {
    pub(crate) fn record(&mut self, assessment: &Assessment) {
        self.total_cases += 1;

        if assessment.risk_level.is_high_risk() {
            self.high_risk += 1;
        }
        if assessment.is_likely_fraud {
            self.likely_fraud += 1;
        }
        if assessment.is_likely_error {
            self.likely_error += 1;
        }

        if let Some(category) = assessment.fraud_category {
            *self
                .by_category
                .entry(category.label().to_string())
                .or_insert(0) += 1;
        }
    }
}

/// Per-case assessments in input order, plus the run statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub assessments: Vec<Assessment>,
    pub statistics: BatchStatistics,
}
