//! Linkroom: share links into rooms from the terminal.
//!
//! Entry point: parses the command line, sets up logging from the loaded
//! configuration, and dispatches the command.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

mod commands;
mod output;
mod system;
mod terminal;

use commands::Cli;
use linkroom_core::config::logging::LoggingConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let logging = commands::load_config(&cli.config)
        .map(|config| config.logging)
        .unwrap_or_default();
    init_logging(&logging);

    if let Err(e) = cli.execute().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging. Logs go to stderr so they never mix with
/// command output.
fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
