use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::catalog::FraudCategory;

/// Sentinel identifier for records submitted without a `case_id`.
pub const UNKNOWN_CASE_ID: &str = "UNKNOWN";

const EVIDENCE_SUFFIX: &str = "_evidence";

/// One administrative case record as supplied by the caller.
///
/// The engine only ever reads two things out of the field map: whether an
/// indicator key is present and `true`, and an optional `<key>_evidence`
/// string alongside it. Every other field (property references, banding,
/// payment history, ...) is carried opaquely so callers can round-trip their
/// own metadata through the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl CaseRecord {
    pub fn new(case_id: &str) -> Self {
        Self {
            case_id: Some(case_id.to_string()),
            fields: BTreeMap::new(),
        }
    }

    /// Mark an indicator key as present-and-true.
    pub fn with_flag(mut self, key: &str) -> Self {
        self.fields.insert(key.to_string(), Value::Bool(true));
        self
    }

    /// Attach caller evidence text for an indicator key.
    pub fn with_evidence(mut self, key: &str, evidence: &str) -> Self {
        self.fields.insert(
            format!("{key}{EVIDENCE_SUFFIX}"),
            Value::String(evidence.to_string()),
        );
        self
    }

    pub fn insert_field(&mut self, key: &str, value: Value) {
        self.fields.insert(key.to_string(), value);
    }

    /// Case identifier, falling back to the sentinel for anonymous records.
    pub fn case_reference(&self) -> &str {
        self.case_id.as_deref().unwrap_or(UNKNOWN_CASE_ID)
    }

    /// Whether an indicator key is present and `true`. Absent keys and
    /// non-boolean values both read as not present.
    pub fn is_flagged(&self, key: &str) -> bool {
        matches!(self.fields.get(key), Some(Value::Bool(true)))
    }

    pub fn evidence_for(&self, key: &str) -> Option<&str> {
        self.fields
            .get(&format!("{key}{EVIDENCE_SUFFIX}"))
            .and_then(Value::as_str)
    }
}

/// An indicator that matched a case, with the evidence that supported it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedIndicator {
    pub key: String,
    pub description: String,
    pub weight: f64,
    pub detected: bool,
    pub evidence: String,
}

impl DetectedIndicator {
    pub fn is_mitigating(&self) -> bool {
        self.weight < 0.0
    }
}

/// Discrete prioritization tier derived from the final risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Fixed thresholds partitioning [0, 1] with no gaps. Pure and total:
    /// scores are clamped upstream, so any input lands in exactly one tier.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.90 {
            RiskLevel::Critical
        } else if score >= 0.75 {
            RiskLevel::High
        } else if score >= 0.50 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    /// High and Critical cases are counted as high-risk in batch statistics.
    pub const fn is_high_risk(self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::Critical)
    }
}

/// Display classification derived from the two independent likelihood flags.
///
/// The flags are not mutually exclusive; when both hold, fraud is displayed
/// first, and when neither holds the case is uncertain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    LikelyFraud,
    LikelyError,
    Uncertain,
}

impl Classification {
    pub const fn from_flags(is_likely_fraud: bool, is_likely_error: bool) -> Self {
        if is_likely_fraud {
            Classification::LikelyFraud
        } else if is_likely_error {
            Classification::LikelyError
        } else {
            Classification::Uncertain
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Classification::LikelyFraud => "likely_fraud",
            Classification::LikelyError => "likely_error",
            Classification::Uncertain => "uncertain",
        }
    }
}

/// The engine's full output for one case. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub case_id: String,
    pub fraud_category: Option<FraudCategory>,
    pub risk_level: RiskLevel,
    pub risk_score: f64,
    pub is_likely_fraud: bool,
    pub is_likely_error: bool,
    pub indicators: Vec<DetectedIndicator>,
    pub recommendations: Vec<String>,
    pub confidence: f64,
}

impl Assessment {
    pub fn classification(&self) -> Classification {
        Classification::from_flags(self.is_likely_fraud, self.is_likely_error)
    }
}
