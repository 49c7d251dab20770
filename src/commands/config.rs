//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use linkroom_core::config::AppConfig;
use linkroom_core::error::AppError;
use linkroom_store::StoreMode;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate configuration and report the store mode
    Validate,
    /// Generate a default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config/generated.toml")]
        output: String,
    },
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = redacted(super::load_config(config_path)?);
            match format {
                OutputFormat::Json => output::print_json(&config),
                OutputFormat::Table => print_summary(&config),
            }
        }
        ConfigCommand::Validate => match super::load_config(config_path) {
            Ok(config) => {
                output::print_success(&format!("Configuration '{}' is valid", config_path));
                print_summary(&config);
                if StoreMode::select(&config.remote).is_local() {
                    output::print_warning("Remote store not configured; local mode will be used");
                }
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {}", e));
                return Err(e);
            }
        },
        ConfigCommand::Generate { output: out_path } => {
            let default_config = include_str!("../../config/default.toml");

            if let Some(parent) = std::path::Path::new(out_path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(out_path, default_config).await?;

            output::print_success(&format!("Default config written to '{}'", out_path));
        }
    }

    Ok(())
}

fn print_summary(config: &AppConfig) {
    let mode = StoreMode::select(&config.remote);
    output::print_kv("Store mode", &mode.to_string());
    output::print_kv(
        "Remote URL",
        config.remote.base_url.as_deref().unwrap_or("(unset)"),
    );
    output::print_kv("API key", &config.remote.masked_api_key());
    output::print_kv("Collection", &config.remote.collections.links);
    output::print_kv("Data dir", &config.local.data_dir);
    output::print_kv("Persist", &config.local.persist.to_string());
    output::print_kv("Page URL", &config.view.page_url);
    output::print_kv("Poll (ms)", &config.view.poll_interval_ms.to_string());
    output::print_kv(
        "Logging",
        &format!("{} ({})", config.logging.level, config.logging.format),
    );
}

/// Copy of `config` safe to print.
fn redacted(mut config: AppConfig) -> AppConfig {
    if config.remote.api_key.is_some() {
        config.remote.api_key = Some(config.remote.masked_api_key());
    }
    config
}
