//! Deterministic fraud-versus-error triage for council tax case records.
//!
//! The [`detection`] module is the whole of the decision logic: a weighted
//! indicator catalog, a single-case evaluator, risk tiering, recommendation
//! synthesis, and batch aggregation. Everything else here is plumbing for
//! the service that hosts it.

pub mod config;
pub mod detection;
pub mod error;
pub mod telemetry;
