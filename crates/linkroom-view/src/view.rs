//! Seams between the controllers and a concrete front-end.

use async_trait::async_trait;

use linkroom_core::result::AppResult;
use linkroom_core::types::RoomCode;

use crate::render::ListRow;

/// One change the front-end must reflect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewUpdate {
    /// Show the banner explaining that links stay on this device.
    ConfigWarning,
    /// Pre-fill the display-name input.
    DisplayName(String),
    /// Show the landing screen (create or join a room).
    Landing,
    /// Show the room screen.
    Room {
        /// Active room.
        room: RoomCode,
        /// Address that opens this room.
        share_url: String,
    },
    /// Show an inline error, or clear it with `None`.
    Error(Option<String>),
    /// Enable or disable the send control.
    SendEnabled(bool),
    /// Empty the URL input.
    ClearUrlInput,
    /// Replace the rendered link list.
    Links(Vec<ListRow>),
    /// Brief confirmation next to the control that triggered it.
    Toast(String),
    /// Present `text` for the user to copy by hand.
    ManualCopy {
        /// Prompt shown with the text.
        prompt: String,
        /// Text to copy.
        text: String,
    },
}

/// Receiver of view updates.
pub trait View: Send + Sync + 'static {
    /// Reflect one update.
    fn apply(&self, update: ViewUpdate);
}

/// Capability to place text on the system clipboard. May fail.
#[async_trait]
pub trait Clipboard: Send + Sync + 'static {
    /// Write `text` to the clipboard.
    async fn write_text(&self, text: &str) -> AppResult<()>;
}
