//! The shared link record.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::room::RoomCode;

/// Sender shown when the display name is blank.
pub const ANONYMOUS_SENDER: &str = "Anon";

/// One shared URL in a room. Immutable once created.
///
/// Field names on the wire are `room`, `url`, `sender`, and `createdAt`.
/// Records read back from a remote store may carry extra fields, which are
/// ignored; a missing `sender` or `createdAt` reads as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Normalized code of the room the link was shared in.
    pub room: String,
    /// Absolute http(s) URL.
    pub url: String,
    /// Display name of the sender.
    #[serde(default)]
    pub sender: String,
    /// Creation time as an ISO-8601 UTC string with millisecond precision.
    #[serde(default)]
    pub created_at: String,
}

impl Link {
    /// Build a link stamped with `created_at`.
    ///
    /// A blank `sender` is replaced by [`ANONYMOUS_SENDER`].
    pub fn new(
        room: &RoomCode,
        url: impl Into<String>,
        sender: &str,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            room: room.as_str().to_string(),
            url: url.into(),
            sender: resolve_sender(sender),
            created_at: format_timestamp(created_at),
        }
    }

    /// The creation time, if the stored string parses.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    /// The sender, or [`ANONYMOUS_SENDER`] when blank.
    pub fn display_sender(&self) -> &str {
        let trimmed = self.sender.trim();
        if trimmed.is_empty() {
            ANONYMOUS_SENDER
        } else {
            trimmed
        }
    }
}

/// Trimmed display name, or [`ANONYMOUS_SENDER`] when nothing is left.
pub fn resolve_sender(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        ANONYMOUS_SENDER.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Format a timestamp the way links store it: `2026-10-19T08:15:00.123Z`.
///
/// Fixed millisecond precision keeps lexicographic order equal to
/// chronological order.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an RFC 3339 / ISO-8601 timestamp into UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|at| at.with_timezone(&Utc))
}
