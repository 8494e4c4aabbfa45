use std::sync::Arc;

use axum::{
    extract::State,
    routing::post,
    Json, Router,
};

use super::batch::BatchOutcome;
use super::domain::{Assessment, CaseRecord};
use super::evaluation::CaseEvaluator;

/// Router builder exposing the two engine operations over HTTP.
///
/// Both endpoints are total over well-typed input: a malformed record simply
/// evaluates its absent keys to `false`, so there is no failure path past
/// JSON extraction.
pub fn assessment_router(evaluator: Arc<CaseEvaluator>) -> Router {
    Router::new()
        .route("/api/v1/cases/assess", post(assess_handler))
        .route("/api/v1/cases/batch", post(batch_handler))
        .with_state(evaluator)
}

pub(crate) async fn assess_handler(
    State(evaluator): State<Arc<CaseEvaluator>>,
    Json(record): Json<CaseRecord>,
) -> Json<Assessment> {
    Json(evaluator.assess(&record))
}

pub(crate) async fn batch_handler(
    State(evaluator): State<Arc<CaseEvaluator>>,
    Json(records): Json<Vec<CaseRecord>>,
) -> Json<BatchOutcome> {
    Json(evaluator.assess_batch(&records))
}
