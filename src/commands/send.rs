//! One-shot send.

use std::sync::Arc;

use clap::Args;

use crate::system::SystemClipboard;
use crate::terminal::TerminalView;
use linkroom_core::error::AppError;
use linkroom_core::types::RoomCode;
use linkroom_view::{PageLocation, RoomController, SendOutcome};

/// Arguments for the send command
#[derive(Debug, Args)]
pub struct SendArgs {
    /// Room code
    pub room: String,
    /// URL to share; `https://` is assumed when no scheme is given
    pub url: String,
    /// Sender name (defaults to the saved display name)
    #[arg(short, long)]
    pub name: Option<String>,
}

/// Execute the send command
pub async fn execute(args: &SendArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let room = RoomCode::parse(&args.room)?;
    let (store, preferences) = super::open_store(&config).await?;
    let name = match &args.name {
        Some(name) => name.clone(),
        None => preferences.display_name().await?,
    };

    let page = PageLocation::parse(&config.view.page_url)?.with_room(&room);
    let controller = RoomController::new(
        room,
        page,
        Arc::new(store),
        Arc::new(TerminalView::new()),
        Arc::new(SystemClipboard),
    );

    match controller.send(&args.url, &name).await {
        SendOutcome::Sent(_) => Ok(()),
        SendOutcome::Rejected => Err(AppError::validation("Link was not sent")),
        SendOutcome::Failed => Err(AppError::store_unavailable("Link was not sent")),
    }
}
