use serde::{Deserialize, Serialize};

/// Tunable knobs the evaluator exposes to its operator.
///
/// The scoring thresholds themselves are fixed, audited constants; only the
/// monetary threshold quoted in the critical-tier prosecution action varies
/// between councils.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub prosecution_threshold_gbp: u32,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            prosecution_threshold_gbp: 2000,
        }
    }
}
