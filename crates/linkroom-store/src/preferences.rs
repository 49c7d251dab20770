//! Client-local preferences. Independent of room and of the link store mode.

use std::sync::Arc;

use tracing::debug;

use linkroom_core::result::AppResult;
use linkroom_core::traits::KeyValueStore;

use crate::keys;

/// Display-name preference persisted in the device key/value store.
#[derive(Debug, Clone)]
pub struct Preferences {
    kv: Arc<dyn KeyValueStore>,
}

impl Preferences {
    /// Create preferences over `kv`.
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// The saved display name, or an empty string when none was saved.
    pub async fn display_name(&self) -> AppResult<String> {
        Ok(self.kv.get(&keys::display_name()).await?.unwrap_or_default())
    }

    /// Persist the trimmed display name. A blank name clears the preference.
    pub async fn set_display_name(&self, name: &str) -> AppResult<()> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            self.kv.remove(&keys::display_name()).await?;
        } else {
            self.kv.set(&keys::display_name(), trimmed).await?;
        }
        debug!(len = trimmed.len(), "Saved display name");
        Ok(())
    }
}
