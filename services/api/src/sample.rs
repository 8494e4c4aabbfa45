use chrono::{Duration, Local};
use council_triage::detection::CaseRecord;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::Value;

/// Indicator keys per fraud pattern, used to synthesize realistic demo cases.
/// Keys must match the standard catalog or the generated cases score as
/// legitimate.
const DISCOUNT_KEYS: &[&str] = &[
    "multiple_utility_accounts",
    "electoral_register_mismatch",
    "social_media_evidence",
    "multiple_vehicles",
    "credit_check_mismatch",
];
const STUDENT_KEYS: &[&str] = &[
    "post_graduation_claim",
    "employment_income",
    "part_time_status",
    "fake_documentation",
    "historical_pattern",
];
const EMPTY_PROPERTY_KEYS: &[&str] = &[
    "utility_usage",
    "rental_listings",
    "neighbor_reports",
    "maintenance_activity",
    "postal_deliveries",
];
const CUCKOOING_KEYS: &[&str] = &[
    "sudden_payment_regularity",
    "behavior_change",
    "antisocial_reports",
    "vulnerable_resident",
    "payment_source_change",
    "police_intelligence",
];
const MITIGATING_KEYS: &[&str] = &[
    "immediate_cooperation",
    "consistent_explanation",
    "documentation_provided",
    "self_reported",
    "first_occurrence",
    "recent_life_change",
];

const FRAUD_PATTERNS: &[&[&str]] = &[
    DISCOUNT_KEYS,
    STUDENT_KEYS,
    EMPTY_PROPERTY_KEYS,
    CUCKOOING_KEYS,
];

const STREETS: &[&str] = &["High", "Main", "Church", "Park", "Victoria"];
const BANDS: &[&str] = &["A", "B", "C", "D", "E", "F", "G", "H"];
const DISCOUNTS: &[&str] = &["None", "Single Person", "Student", "Empty", "Disability"];
const PAYMENT_HISTORIES: &[&str] = &["Regular", "Irregular", "Delinquent", "Recently Improved"];

/// Generate synthetic council tax cases for demos and batch runs.
///
/// Roughly 30% of cases carry a dense fraud pattern, 20% look like honest
/// errors (sparse fraud signals under heavy mitigation), and the rest are
/// legitimate accounts with little or nothing flagged. A fixed seed makes a
/// run reproducible.
pub(crate) fn generate_sample_cases(count: usize, seed: Option<u64>) -> Vec<CaseRecord> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    (0..count).map(|index| generate_case(index, &mut rng)).collect()
}

fn generate_case(index: usize, rng: &mut StdRng) -> CaseRecord {
    let mut record = CaseRecord::new(&format!("CASE-2024-{:04}", index + 1));

    record.insert_field(
        "property_id",
        Value::String(format!("PROP-{}", rng.gen_range(1000..=9999))),
    );
    record.insert_field(
        "account_holder",
        Value::String(format!("Person_{}", index + 1)),
    );
    record.insert_field(
        "address",
        Value::String(format!(
            "{} {} Street",
            rng.gen_range(1..=999),
            pick(rng, STREETS)
        )),
    );
    record.insert_field("council_tax_band", Value::String(pick(rng, BANDS).to_string()));
    record.insert_field("annual_charge", Value::from(rng.gen_range(800..=3500)));
    record.insert_field(
        "current_discount",
        Value::String(pick(rng, DISCOUNTS).to_string()),
    );
    record.insert_field(
        "payment_history",
        Value::String(pick(rng, PAYMENT_HISTORIES).to_string()),
    );
    record.insert_field("account_age_years", Value::from(rng.gen_range(1..=20)));
    let review_days = rng.gen_range(30..=730);
    record.insert_field(
        "last_review_date",
        Value::String(
            (Local::now().date_naive() - Duration::days(review_days))
                .format("%Y-%m-%d")
                .to_string(),
        ),
    );

    let archetype = rng.gen::<f64>();
    if archetype < 0.3 {
        populate_fraud_case(&mut record, rng);
    } else if archetype < 0.5 {
        populate_error_case(&mut record, rng);
    } else {
        populate_legitimate_case(&mut record, rng);
    }

    record.insert_field(
        "data_quality_score",
        Value::from(rng.gen_range(0.6..1.0)),
    );
    record.insert_field(
        "last_contact_days_ago",
        Value::from(rng.gen_range(0..=365)),
    );
    record.insert_field(
        "num_previous_investigations",
        Value::from(weighted_investigations(rng)),
    );

    if record.is_flagged("vulnerable_resident") {
        let age = if rng.gen_bool(0.5) {
            rng.gen_range(70..=95)
        } else {
            rng.gen_range(18..=25)
        };
        record.insert_field("resident_age", Value::from(age));
        record.insert_field("disability_registered", Value::Bool(rng.gen_bool(0.5)));
        record.insert_field("social_services_involved", Value::Bool(rng.gen_bool(0.5)));
    }

    record
}

fn populate_fraud_case(record: &mut CaseRecord, rng: &mut StdRng) {
    let pattern = *FRAUD_PATTERNS
        .choose(rng)
        .expect("fraud pattern table is non-empty");

    // 70-100% of the pattern's indicators present.
    let floor = pattern.len() * 7 / 10;
    let picked = rng.gen_range(floor..=pattern.len());
    for key in pattern.choose_multiple(rng, picked).copied() {
        flag_with_evidence(record, key, &format!("Evidence for {}", humanize(key)));
    }

    if rng.gen_bool(0.1) {
        let key = pick(rng, MITIGATING_KEYS);
        record.insert_field(key, Value::Bool(true));
    }
}

fn populate_error_case(record: &mut CaseRecord, rng: &mut StdRng) {
    let all_fraud: Vec<&str> = FRAUD_PATTERNS.iter().flat_map(|keys| keys.iter().copied()).collect();
    let picked = rng.gen_range(1..=3usize);
    for key in all_fraud.choose_multiple(rng, picked.min(all_fraud.len())).copied() {
        flag_with_evidence(record, key, &format!("Possible {}", humanize(key)));
    }

    let floor = MITIGATING_KEYS.len() * 6 / 10;
    let ceiling = MITIGATING_KEYS.len() * 8 / 10;
    let picked = rng.gen_range(floor..=ceiling);
    for key in MITIGATING_KEYS.choose_multiple(rng, picked).copied() {
        record.insert_field(key, Value::Bool(true));
    }
}

fn populate_legitimate_case(record: &mut CaseRecord, rng: &mut StdRng) {
    if rng.gen_bool(0.2) {
        let picked = rng.gen_range(1..=2usize);
        for key in MITIGATING_KEYS.choose_multiple(rng, picked).copied() {
            record.insert_field(key, Value::Bool(true));
        }
    }
}

fn flag_with_evidence(record: &mut CaseRecord, key: &str, evidence: &str) {
    record.insert_field(key, Value::Bool(true));
    record.insert_field(&format!("{key}_evidence"), Value::String(evidence.to_string()));
}

fn weighted_investigations(rng: &mut StdRng) -> u32 {
    match rng.gen::<f64>() {
        roll if roll < 0.70 => 0,
        roll if roll < 0.90 => 1,
        roll if roll < 0.98 => 2,
        _ => 3,
    }
}

fn pick<'a>(rng: &mut StdRng, options: &[&'a str]) -> &'a str {
    options.choose(rng).expect("option table is non-empty")
}

fn humanize(key: &str) -> String {
    key.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use council_triage::detection::{CaseEvaluator, IndicatorCatalog};

    #[test]
    fn seeded_generation_is_reproducible() {
        let first = generate_sample_cases(20, Some(42));
        let second = generate_sample_cases(20, Some(42));
        assert_eq!(first, second);
    }

    #[test]
    fn generated_cases_carry_identifiers_and_metadata() {
        let cases = generate_sample_cases(5, Some(7));

        assert_eq!(cases.len(), 5);
        assert_eq!(cases[0].case_reference(), "CASE-2024-0001");
        for case in &cases {
            assert!(case.fields.contains_key("council_tax_band"));
            assert!(case.fields.contains_key("payment_history"));
        }
    }

    #[test]
    fn generated_batches_feed_the_evaluator_without_surprises() {
        let evaluator = CaseEvaluator::new(IndicatorCatalog::standard());
        let cases = generate_sample_cases(100, Some(1));

        let outcome = evaluator.assess_batch(&cases);

        assert_eq!(outcome.statistics.total_cases, 100);
        for assessment in &outcome.assessments {
            assert!(assessment.risk_score >= 0.0 && assessment.risk_score <= 1.0);
            assert!(assessment.confidence <= 0.95);
        }
    }
}
