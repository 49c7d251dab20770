//! Link store manager: picks the backend once, at startup, from configuration.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use linkroom_core::config::AppConfig;
use linkroom_core::config::remote::RemoteStoreConfig;
use linkroom_core::result::AppResult;
use linkroom_core::traits::{KeyValueStore, LinkStore};
use linkroom_core::types::{Link, RoomCode};

use crate::providers::{LocalLinkStore, RemoteLinkStore};

/// Which backend serves the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreMode {
    /// Remote document store over HTTP.
    Remote,
    /// On-device storage (demo / local-fallback mode).
    Local,
}

impl StoreMode {
    /// Remote when the remote store is fully configured, local otherwise.
    pub fn select(remote: &RemoteStoreConfig) -> Self {
        if remote.is_configured() {
            Self::Remote
        } else {
            Self::Local
        }
    }

    /// Whether this is the local-fallback mode.
    pub fn is_local(self) -> bool {
        self == Self::Local
    }
}

impl fmt::Display for StoreMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote => write!(f, "remote"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// Link store wrapping the backend selected for this session.
#[derive(Debug, Clone)]
pub struct LinkStoreManager {
    inner: Arc<dyn LinkStore>,
    mode: StoreMode,
}

impl LinkStoreManager {
    /// Select and build the backend described by `config`.
    ///
    /// `kv` backs the local store when the remote one is not configured.
    pub fn from_config(config: &AppConfig, kv: Arc<dyn KeyValueStore>) -> AppResult<Self> {
        let mode = StoreMode::select(&config.remote);
        let inner: Arc<dyn LinkStore> = match mode {
            StoreMode::Remote => {
                let store = RemoteLinkStore::new(&config.remote)?;
                info!(collection = %store.collection_url(), "Using remote link store");
                Arc::new(store)
            }
            StoreMode::Local => {
                info!(
                    backend = kv.backend_type(),
                    "Remote store not configured; running in local demo mode"
                );
                Arc::new(LocalLinkStore::new(kv))
            }
        };
        Ok(Self { inner, mode })
    }

    /// Wrap an existing provider (for testing).
    pub fn from_provider(provider: Arc<dyn LinkStore>, mode: StoreMode) -> Self {
        Self {
            inner: provider,
            mode,
        }
    }

    /// The mode chosen at construction.
    pub fn mode(&self) -> StoreMode {
        self.mode
    }
}

#[async_trait]
impl LinkStore for LinkStoreManager {
    fn provider_type(&self) -> &str {
        self.inner.provider_type()
    }

    async fn list(&self, room: &RoomCode) -> AppResult<Vec<Link>> {
        self.inner.list(room).await
    }

    async fn create(&self, link: Link) -> AppResult<Link> {
        self.inner.create(link).await
    }
}
