//! The page's addressable state: a URL whose `room` query parameter names
//! the active room.
//!
//! Moving between rooms means building a new location and reloading the
//! session from it, so a share link always matches the room on screen.

use std::fmt;

use url::Url;

use linkroom_core::error::{AppError, ErrorKind};
use linkroom_core::result::AppResult;
use linkroom_core::types::RoomCode;
use linkroom_core::types::room::normalize;

/// Query parameter carrying the room code.
pub const ROOM_PARAM: &str = "room";

/// An absolute page address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation(Url);

impl PageLocation {
    /// Parse an absolute page address.
    pub fn parse(raw: &str) -> AppResult<Self> {
        Url::parse(raw.trim()).map(Self).map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Invalid page address: {raw}"),
                e,
            )
        })
    }

    /// Wrap an already parsed URL.
    pub fn from_url(url: Url) -> Self {
        Self(url)
    }

    /// The room named by the first `room` parameter, if it normalizes to a
    /// non-empty code.
    pub fn room(&self) -> Option<RoomCode> {
        self.0
            .query_pairs()
            .find(|(key, _)| key == ROOM_PARAM)
            .map(|(_, value)| normalize(&value))
            .filter(|code| !code.is_empty())
            .and_then(|code| RoomCode::parse(&code).ok())
    }

    /// A copy of this location pointing at `room`.
    ///
    /// The first `room` parameter is replaced in place and any later ones
    /// are dropped; other parameters and the fragment are kept.
    pub fn with_room(&self, room: &RoomCode) -> Self {
        let mut pairs: Vec<(String, String)> = Vec::new();
        let mut replaced = false;
        for (key, value) in self.0.query_pairs() {
            if key == ROOM_PARAM {
                if !replaced {
                    pairs.push((ROOM_PARAM.to_string(), room.as_str().to_string()));
                    replaced = true;
                }
            } else {
                pairs.push((key.into_owned(), value.into_owned()));
            }
        }
        if !replaced {
            pairs.push((ROOM_PARAM.to_string(), room.as_str().to_string()));
        }

        let mut next = self.0.clone();
        next.set_query(None);
        next.query_pairs_mut().extend_pairs(pairs);
        Self(next)
    }

    /// The underlying URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for PageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}
