//! Key builders for everything linkroom persists on the device.
//!
//! Keeping key construction in one place makes it easy to find every key
//! the application writes.

use linkroom_core::types::RoomCode;

/// Namespace applied to all persisted keys.
const PREFIX: &str = "qls";

/// Key holding the JSON-encoded link list of a room.
pub fn room_links(room: &RoomCode) -> String {
    format!("{PREFIX}:links:{room}")
}

/// Key holding the user's display-name preference.
pub fn display_name() -> String {
    format!("{PREFIX}:name")
}
