use super::super::catalog::FraudCategory;
use super::super::domain::RiskLevel;
use super::config::EvaluationConfig;

/// Final score strictly above this reads as likely fraud, provided the
/// mitigating error score stays below [`FRAUD_ERROR_CEILING_CENTI`].
const FRAUD_SCORE_FLOOR: f64 = 0.6;
const FRAUD_ERROR_CEILING_CENTI: i64 = 30;
/// Final score strictly below this, or error score strictly above
/// [`ERROR_SCORE_FLOOR_CENTI`] hundredths, reads as likely honest error.
const ERROR_SCORE_CEILING: f64 = 0.4;
const ERROR_SCORE_FLOOR_CENTI: i64 = 50;

/// The two likelihood flags, computed independently. The error-score side is
/// compared in exact hundredths.
pub(crate) fn classify(final_score: f64, error_centi: i64) -> (bool, bool) {
    let is_likely_fraud =
        final_score > FRAUD_SCORE_FLOOR && error_centi < FRAUD_ERROR_CEILING_CENTI;
    let is_likely_error = final_score < ERROR_SCORE_CEILING || error_centi > ERROR_SCORE_FLOOR_CENTI;
    (is_likely_fraud, is_likely_error)
}

/// Build the ordered action list for an assessed case.
///
/// Precedence rule: the error branch suppresses the fraud-tier actions even
/// when a case is classified both ways. That mirrors the historical decision
/// order of the triage playbook and is relied on by downstream letter
/// templates, so it is an explicit rule here rather than an accident of
/// branch ordering.
///
/// The cuckooing safeguarding escalation is prepended to whichever base list
/// was built, including an empty one.
pub(crate) fn recommendations_for(
    category: Option<FraudCategory>,
    risk_level: RiskLevel,
    is_likely_fraud: bool,
    is_likely_error: bool,
    config: &EvaluationConfig,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if is_likely_error {
        recommendations.push("Send educational letter about council tax obligations".to_string());
        recommendations.push("Offer support to correct the error".to_string());
    } else if is_likely_fraud {
        match risk_level {
            RiskLevel::Critical => {
                recommendations.push("Immediate investigation required".to_string());
                recommendations.push(format!(
                    "Consider prosecution if amount > \u{a3}{}",
                    config.prosecution_threshold_gbp
                ));
                recommendations.push("Issue formal caution".to_string());
            }
            RiskLevel::High => {
                recommendations.push("Schedule property inspection".to_string());
                recommendations.push("Request supporting documentation".to_string());
                recommendations.push("Cross-reference with other departments".to_string());
            }
            RiskLevel::Medium => {
                recommendations.push("Send compliance review letter".to_string());
                recommendations.push("Monitor account for 6 months".to_string());
            }
            RiskLevel::Low => {
                recommendations.push("Add to watchlist".to_string());
                recommendations.push("Review at next annual check".to_string());
            }
        }
    }

    if category.is_some_and(FraudCategory::is_safeguarding_sensitive) {
        recommendations.insert(0, "Alert adult safeguarding team".to_string());
        recommendations.insert(1, "Coordinate with police".to_string());
    }

    recommendations
}
