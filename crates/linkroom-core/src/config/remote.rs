//! Remote document store configuration.

use serde::{Deserialize, Serialize};

/// Markers left in the shipped example configuration. A base URL or API key
/// containing any of them counts as "not configured".
pub const PLACEHOLDER_MARKERS: &[&str] = &["YOURDB", "YOUR_RESTDB_API_KEY"];

/// Remote (restdb-style) document store settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteStoreConfig {
    /// Base REST address, e.g. `https://mydb-1234.restdb.io/rest`.
    #[serde(default)]
    pub base_url: Option<String>,
    /// API key sent in the `x-apikey` header.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Collection-name mapping.
    #[serde(default)]
    pub collections: CollectionsConfig,
}

/// Collection names used on the remote store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionsConfig {
    /// Collection holding shared links.
    #[serde(default = "default_links_collection")]
    pub links: String,
}

impl Default for CollectionsConfig {
    fn default() -> Self {
        Self {
            links: default_links_collection(),
        }
    }
}

impl RemoteStoreConfig {
    /// Whether the remote store can be used: both the base URL and the API
    /// key are present, non-blank, and free of placeholder markers.
    pub fn is_configured(&self) -> bool {
        let (Some(base_url), Some(api_key)) = (self.base_url.as_deref(), self.api_key.as_deref())
        else {
            return false;
        };
        if base_url.trim().is_empty() || api_key.trim().is_empty() {
            return false;
        }
        let combined = format!("{base_url}{api_key}");
        !PLACEHOLDER_MARKERS
            .iter()
            .any(|marker| combined.contains(marker))
    }

    /// The API key with everything but its last four characters masked.
    pub fn masked_api_key(&self) -> String {
        match self.api_key.as_deref() {
            None | Some("") => "(unset)".to_string(),
            Some(key) => {
                let visible: String = key
                    .chars()
                    .rev()
                    .take(4)
                    .collect::<Vec<_>>()
                    .into_iter()
                    .rev()
                    .collect();
                format!("****{visible}")
            }
        }
    }
}

fn default_links_collection() -> String {
    "links".to_string()
}
