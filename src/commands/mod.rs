//! CLI command definitions and dispatch.

pub mod config;
pub mod list;
pub mod open;
pub mod room;
pub mod send;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use linkroom_core::config::AppConfig;
use linkroom_core::error::AppError;
use linkroom_store::{LinkStoreManager, Preferences, kv};

/// Linkroom: share links into rooms
#[derive(Debug, Parser)]
#[command(name = "linkroom", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute; defaults to `open`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open an interactive session
    Open(open::OpenArgs),
    /// List the links shared in a room
    List(list::ListArgs),
    /// Send a link to a room
    Send(send::SendArgs),
    /// Room codes
    Room(room::RoomArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            None => open::execute(&open::OpenArgs::default(), &self.config).await,
            Some(Commands::Open(args)) => open::execute(args, &self.config).await,
            Some(Commands::List(args)) => list::execute(args, &self.config, self.format).await,
            Some(Commands::Send(args)) => send::execute(args, &self.config).await,
            Some(Commands::Room(args)) => room::execute(args, &self.config, self.format).await,
            Some(Commands::Config(args)) => config::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Helper: open device storage and select the link store
pub async fn open_store(config: &AppConfig) -> Result<(LinkStoreManager, Preferences), AppError> {
    let kv = kv::open(&config.local).await?;
    let store = LinkStoreManager::from_config(config, Arc::clone(&kv))?;
    Ok((store, Preferences::new(kv)))
}
