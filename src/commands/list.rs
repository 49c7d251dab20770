//! One-shot room listing.

use chrono::Utc;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::error;

use crate::output::{self, OutputFormat};
use linkroom_core::error::AppError;
use linkroom_core::traits::LinkStore;
use linkroom_core::types::RoomCode;
use linkroom_core::util::time_ago;
use linkroom_view::controller::room::LOAD_FAILED_MESSAGE;
use linkroom_view::render::EMPTY_ROOM_TEXT;

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Room code
    pub room: String,
}

/// Link display row for table output
#[derive(Debug, Serialize, Tabled)]
struct LinkListRow {
    /// Position
    #[tabled(rename = "#")]
    index: usize,
    /// Link target
    url: String,
    /// Sender
    sender: String,
    /// Age
    age: String,
    /// Creation time
    created_at: String,
}

/// Execute the list command
pub async fn execute(args: &ListArgs, config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let room = RoomCode::parse(&args.room)?;
    let (store, _) = super::open_store(&config).await?;

    let links = store
        .list(&room)
        .await
        .map_err(|e| load_failure(&room, e))?;
    match format {
        OutputFormat::Json => output::print_json(&links),
        OutputFormat::Table => {
            let now = Utc::now();
            let rows: Vec<LinkListRow> = links
                .iter()
                .enumerate()
                .map(|(i, link)| LinkListRow {
                    index: i + 1,
                    url: link.url.clone(),
                    sender: link.display_sender().to_string(),
                    age: time_ago(Some(&link.created_at), now),
                    created_at: link.created_at.clone(),
                })
                .collect();
            output::print_list(&rows, format, EMPTY_ROOM_TEXT);
        }
    }
    Ok(())
}

/// Log a failed listing and replace it with the generic message shown to users.
fn load_failure(room: &RoomCode, e: AppError) -> AppError {
    error!(%room, error = %e, status = ?e.status, "Failed to load links");
    AppError::store_unavailable(LOAD_FAILED_MESSAGE)
}
