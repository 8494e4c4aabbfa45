use std::path::PathBuf;

use clap::Args;
use council_triage::detection::{
    Assessment, BatchOutcome, CaseCsvImporter, CaseEvaluator, CaseRecord, Classification,
    IndicatorCatalog,
};
use council_triage::error::AppError;

use crate::sample::generate_sample_cases;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Number of generated cases in the batch portion of the demo.
    #[arg(long, default_value_t = 50)]
    pub(crate) cases: usize,
    /// Seed for the sample-case generator, for a reproducible run.
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// Number of cases to generate when no CSV export is supplied.
    #[arg(long, default_value_t = 100)]
    pub(crate) cases: usize,
    /// Seed for the sample-case generator.
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Assess cases from a CSV export instead of generated samples.
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Emit the full batch outcome as JSON instead of the summary view.
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let evaluator = CaseEvaluator::new(IndicatorCatalog::standard());

    println!("Council tax fraud triage demo");

    println!("\nCase 1: single person discount fraud");
    let discount_case = CaseRecord::new("DEMO-001")
        .with_flag("multiple_utility_accounts")
        .with_evidence(
            "multiple_utility_accounts",
            "3 utility accounts: John Smith, Jane Doe, J Smith",
        )
        .with_flag("electoral_register_mismatch")
        .with_evidence(
            "electoral_register_mismatch",
            "Electoral roll shows 2 adults registered",
        )
        .with_flag("social_media_evidence")
        .with_evidence("social_media_evidence", "Social profile shows couple living together")
        .with_flag("multiple_vehicles")
        .with_evidence("multiple_vehicles", "2 vehicles registered at the property");
    render_assessment(&evaluator.assess(&discount_case));

    println!("\nCase 2: suspected cuckooing");
    let cuckooing_case = CaseRecord::new("DEMO-002")
        .with_flag("sudden_payment_regularity")
        .with_flag("vulnerable_resident")
        .with_flag("antisocial_reports")
        .with_flag("behavior_change")
        .with_flag("payment_source_change")
        .with_flag("police_intelligence");
    let assessment = evaluator.assess(&cuckooing_case);
    println!("Safeguarding alert: vulnerable person at risk");
    render_assessment(&assessment);

    println!("\nCase 3: likely administrative error");
    let error_case = CaseRecord::new("DEMO-003")
        .with_flag("electoral_register_mismatch")
        .with_flag("immediate_cooperation")
        .with_flag("consistent_explanation")
        .with_flag("self_reported")
        .with_flag("recent_life_change")
        .with_flag("first_occurrence");
    let assessment = evaluator.assess(&error_case);
    render_assessment(&assessment);
    println!("Mitigating factors:");
    for indicator in assessment.indicators.iter().filter(|i| i.is_mitigating()) {
        println!("  - {}", indicator.description);
    }

    println!("\nBatch analysis: processing {} generated cases", args.cases);
    let cases = generate_sample_cases(args.cases, args.seed);
    let outcome = evaluator.assess_batch(&cases);
    render_statistics(&outcome);

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let evaluator = CaseEvaluator::new(IndicatorCatalog::standard());

    let (cases, source) = match &args.csv {
        Some(path) => (
            CaseCsvImporter::from_path(path)?,
            format!("CSV export {}", path.display()),
        ),
        None => (
            generate_sample_cases(args.cases, args.seed),
            format!("{} generated cases", args.cases),
        ),
    };

    let outcome = evaluator.assess_batch(&cases);

    if args.json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("batch outcome unavailable as JSON: {err}"),
        }
        return Ok(());
    }

    println!("Batch assessment of {source}");
    render_statistics(&outcome);

    Ok(())
}

fn render_assessment(assessment: &Assessment) {
    println!("Risk level: {}", assessment.risk_level.label().to_uppercase());
    println!("Risk score: {:.1}%", assessment.risk_score * 100.0);
    println!(
        "Classification: {}",
        match assessment.classification() {
            Classification::LikelyFraud => "FRAUD",
            Classification::LikelyError => "ERROR - no fraud suspected",
            Classification::Uncertain => "UNCERTAIN - requires review",
        }
    );
    println!("Confidence: {:.1}%", assessment.confidence * 100.0);

    if let Some(category) = assessment.fraud_category {
        println!("Fraud pattern: {}", category.label());
    }

    if !assessment.indicators.is_empty() {
        println!("Detected indicators:");
        for indicator in &assessment.indicators {
            println!("  - {} ({})", indicator.description, indicator.evidence);
        }
    }

    if !assessment.recommendations.is_empty() {
        println!("Recommended actions:");
        for recommendation in &assessment.recommendations {
            println!("  -> {recommendation}");
        }
    }
}

fn render_statistics(outcome: &BatchOutcome) {
    let stats = &outcome.statistics;
    let total = stats.total_cases.max(1) as f64;

    println!("Total cases analyzed: {}", stats.total_cases);
    println!(
        "High risk cases: {} ({:.1}%)",
        stats.high_risk,
        stats.high_risk as f64 / total * 100.0
    );
    println!(
        "Likely fraud: {} ({:.1}%)",
        stats.likely_fraud,
        stats.likely_fraud as f64 / total * 100.0
    );
    println!(
        "Likely errors: {} ({:.1}%)",
        stats.likely_error,
        stats.likely_error as f64 / total * 100.0
    );

    if !stats.by_category.is_empty() {
        println!("Fraud patterns detected:");
        for (category, count) in &stats.by_category {
            println!("  - {category}: {count} cases");
        }
    }
}
