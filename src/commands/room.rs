//! Room code commands.

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::output::{self, OutputFormat};
use linkroom_core::error::AppError;
use linkroom_core::types::RoomCode;
use linkroom_view::PageLocation;

/// Arguments for room commands
#[derive(Debug, Args)]
pub struct RoomArgs {
    /// Room subcommand
    #[command(subcommand)]
    pub command: RoomCommand,
}

/// Room subcommands
#[derive(Debug, Subcommand)]
pub enum RoomCommand {
    /// Generate a fresh room code and its share link
    New,
}

#[derive(Debug, Serialize)]
struct NewRoom {
    room: RoomCode,
    share_url: String,
}

/// Execute room commands
pub async fn execute(args: &RoomArgs, config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    match &args.command {
        RoomCommand::New => {
            let room = RoomCode::generate();
            let share_url = PageLocation::parse(&config.view.page_url)?
                .with_room(&room)
                .to_string();
            match format {
                OutputFormat::Json => output::print_json(&NewRoom { room, share_url }),
                OutputFormat::Table => {
                    output::print_kv("Room", room.as_str());
                    output::print_kv("Share link", &share_url);
                }
            }
        }
    }

    Ok(())
}
