use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use version_labeler_cli::{
    annotations,
    commands::{self, Commands},
    errors::{error_chain, Error, EXIT_SUCCESS},
    inputs::{ActionContext, GlobalArgs},
};

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// Environment variable holding the log filter
const LOG_FILTER_ENV: &str = "VERSION_LABELER_LOG";

/// Version labeler: keep semantic version bump labels on pull requests
#[derive(Parser)]
#[command(name = "version-labeler")]
#[command(about = "Keep semantic version bump labels on pull requests", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

async fn run(cli: &Cli) -> Result<(), Error> {
    let context = ActionContext::from_args(&cli.global)?;
    commands::execute(&cli.command, &context).await
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match run(&cli).await {
        Ok(()) => std::process::exit(EXIT_SUCCESS),
        Err(e) => {
            let message = error_chain(&e);
            error!("Error: {message}");
            annotations::error(&message);
            std::process::exit(e.exit_code());
        }
    }
}
