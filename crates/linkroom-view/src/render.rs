//! Turning store results into list rows.

use chrono::{DateTime, Utc};

use linkroom_core::types::Link;
use linkroom_core::util::time_ago;

/// Text of the row shown for a room without links.
pub const EMPTY_ROOM_TEXT: &str = "No links yet. Be the first to send one!";

/// One rendered link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRow {
    /// Target of the external link and of the open action.
    pub url: String,
    /// `sender • age`.
    pub meta: String,
}

/// One row of the link list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRow {
    /// The single row shown when a room has no links.
    Placeholder,
    /// A shared link.
    Link(LinkRow),
}

impl ListRow {
    /// The link row, if this is one.
    pub fn as_link(&self) -> Option<&LinkRow> {
        match self {
            Self::Link(row) => Some(row),
            Self::Placeholder => None,
        }
    }
}

/// Render `links` in the order given; the view never re-sorts.
pub fn render_rows(links: &[Link], now: DateTime<Utc>) -> Vec<ListRow> {
    if links.is_empty() {
        return vec![ListRow::Placeholder];
    }
    links
        .iter()
        .map(|link| {
            let age = time_ago(Some(&link.created_at), now);
            ListRow::Link(LinkRow {
                url: link.url.clone(),
                meta: format!("{} • {}", link.display_sender(), age),
            })
        })
        .collect()
}
