use std::io::Cursor;

use super::common::*;
use crate::detection::catalog::FraudCategory;
use crate::detection::importer::CaseCsvImporter;

const EXPORT: &str = "\
case_id,electoral_register_mismatch,electoral_register_mismatch_evidence,self_reported,council_tax_band
CASE-2024-0001,yes,Electoral roll shows 2 adults,no,D
CASE-2024-0002,,,TRUE,B
,1,,0,
";

#[test]
fn import_parses_flags_evidence_and_metadata() {
    let records =
        CaseCsvImporter::from_reader(Cursor::new(EXPORT)).expect("well-formed export parses");

    assert_eq!(records.len(), 3);

    let first = &records[0];
    assert_eq!(first.case_reference(), "CASE-2024-0001");
    assert!(first.is_flagged("electoral_register_mismatch"));
    assert!(!first.is_flagged("self_reported"));
    assert_eq!(
        first.evidence_for("electoral_register_mismatch"),
        Some("Electoral roll shows 2 adults")
    );
    assert_eq!(
        first.fields.get("council_tax_band").and_then(|v| v.as_str()),
        Some("D")
    );

    let second = &records[1];
    assert!(!second.is_flagged("electoral_register_mismatch"));
    assert!(second.is_flagged("self_reported"));

    let third = &records[2];
    assert_eq!(third.case_reference(), "UNKNOWN");
    assert!(third.is_flagged("electoral_register_mismatch"));
}

#[test]
fn imported_records_feed_straight_into_the_evaluator() {
    let records = CaseCsvImporter::from_reader(Cursor::new(EXPORT)).expect("export parses");

    let outcome = evaluator().assess_batch(&records);

    assert_eq!(outcome.statistics.total_cases, 3);
    assert_eq!(
        outcome.assessments[0].fraud_category,
        Some(FraudCategory::SinglePersonDiscount)
    );
    assert_eq!(
        outcome.assessments[0].indicators[0].evidence,
        "Electoral roll shows 2 adults"
    );
    assert!(outcome.assessments[1].is_likely_error);
}

#[test]
fn malformed_csv_surfaces_a_parse_error() {
    // Second row has more cells than the header declares.
    let broken = "case_id,self_reported\nCASE-1,true,unexpected\n";

    let err = CaseCsvImporter::from_reader(Cursor::new(broken))
        .expect_err("ragged rows are rejected");

    assert!(err.to_string().contains("parse"));
}

#[test]
fn missing_file_reports_the_path() {
    let err = CaseCsvImporter::from_path("/nonexistent/cases.csv")
        .expect_err("missing file is an error");

    assert!(err.to_string().contains("/nonexistent/cases.csv"));
}
