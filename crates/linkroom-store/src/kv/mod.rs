//! On-device key/value backends.

pub mod file;
pub mod memory;

use std::sync::Arc;

use tracing::info;

use linkroom_core::config::local::LocalStoreConfig;
use linkroom_core::result::AppResult;
use linkroom_core::traits::KeyValueStore;

pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;

/// Open the key/value store described by `config`.
pub async fn open(config: &LocalStoreConfig) -> AppResult<Arc<dyn KeyValueStore>> {
    if config.persist {
        info!(data_dir = %config.data_dir, "Opening file key/value store");
        Ok(Arc::new(FileKeyValueStore::new(&config.data_dir).await?))
    } else {
        info!("Using in-memory key/value store; nothing will be persisted");
        Ok(Arc::new(MemoryKeyValueStore::new()))
    }
}
