//! Local link store: each room's links as one JSON list in a key/value store.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use linkroom_core::result::AppResult;
use linkroom_core::traits::{KeyValueStore, LinkStore};
use linkroom_core::types::{Link, RoomCode};

use crate::keys;

/// Single-device link store.
///
/// `create` reads, appends, and rewrites the whole room list, so two
/// concurrent writers on the same room may lose a link. Lists grow without
/// bound.
#[derive(Debug, Clone)]
pub struct LocalLinkStore {
    kv: Arc<dyn KeyValueStore>,
}

impl LocalLinkStore {
    /// Create a link store over `kv`.
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Read the stored list in insertion order. Corrupt state reads as empty.
    async fn read_room(&self, room: &RoomCode) -> AppResult<Vec<Link>> {
        let key = keys::room_links(room);
        let Some(raw) = self.kv.get(&key).await? else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        match serde_json::from_str::<Vec<Link>>(&raw) {
            Ok(links) => Ok(links),
            Err(e) => {
                warn!(%room, error = %e, "Discarding unreadable local link list");
                Ok(Vec::new())
            }
        }
    }
}

#[async_trait]
impl LinkStore for LocalLinkStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn list(&self, room: &RoomCode) -> AppResult<Vec<Link>> {
        let mut links = self.read_room(room).await?;
        // Stable, so links with equal timestamps keep insertion order.
        links.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(links)
    }

    async fn create(&self, link: Link) -> AppResult<Link> {
        let room = RoomCode::parse(&link.room)?;
        let mut links = self.read_room(&room).await?;
        links.push(link.clone());
        self.kv
            .set(&keys::room_links(&room), &serde_json::to_string(&links)?)
            .await?;
        debug!(%room, count = links.len(), "Stored link locally");
        Ok(link)
    }
}
