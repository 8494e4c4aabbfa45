use clap::{Args, Parser, Subcommand};
use council_triage::error::AppError;

use crate::demo::{run_batch, run_demo, BatchArgs, DemoArgs};
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "Council Tax Triage",
    about = "Score council tax case records for fraud-versus-error triage from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP assessment service (default command)
    Serve(ServeArgs),
    /// Run a scripted walkthrough of the triage engine on three known cases
    Demo(DemoArgs),
    /// Assess a batch of cases and print the summary statistics
    Batch(BatchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Demo(args) => run_demo(args),
        Command::Batch(args) => run_batch(args),
    }
}
