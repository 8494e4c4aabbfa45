use crate::detection::catalog::IndicatorCatalog;
use crate::detection::domain::CaseRecord;
use crate::detection::evaluation::CaseEvaluator;

pub(super) fn evaluator() -> CaseEvaluator {
    CaseEvaluator::new(IndicatorCatalog::standard())
}

/// Four single-person-discount indicators, raw sum 3.0, normalized 0.6.
/// Sits exactly on the fraud-classification boundary.
pub(super) fn discount_boundary_case() -> CaseRecord {
    CaseRecord::new("SPD-BOUNDARY")
        .with_flag("multiple_utility_accounts")
        .with_flag("electoral_register_mismatch")
        .with_flag("social_media_evidence")
        .with_flag("multiple_vehicles")
}

/// Five cuckooing indicators, raw sum 4.2 over six declared, normalized 0.7.
pub(super) fn cuckooing_case() -> CaseRecord {
    CaseRecord::new("CUCKOO-001")
        .with_flag("sudden_payment_regularity")
        .with_flag("vulnerable_resident")
        .with_flag("antisocial_reports")
        .with_flag("behavior_change")
        .with_flag("police_intelligence")
}

/// One weak fraud signal buried under four mitigating factors.
pub(super) fn administrative_error_case() -> CaseRecord {
    CaseRecord::new("ERR-001")
        .with_flag("electoral_register_mismatch")
        .with_flag("immediate_cooperation")
        .with_flag("consistent_explanation")
        .with_flag("self_reported")
        .with_flag("first_occurrence")
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
