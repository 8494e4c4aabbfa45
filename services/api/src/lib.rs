mod cli;
mod demo;
mod infra;
mod routes;
mod sample;
mod server;

use council_triage::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
