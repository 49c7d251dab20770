//! Local single-device store configuration.

use serde::{Deserialize, Serialize};

/// Settings for the on-device key/value store used in local mode and for
/// the display-name preference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalStoreConfig {
    /// Directory holding one file per persisted key.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// When `false`, values live in memory only and vanish on exit.
    #[serde(default = "default_persist")]
    pub persist: bool,
}

impl Default for LocalStoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            persist: default_persist(),
        }
    }
}

fn default_data_dir() -> String {
    "data/local".to_string()
}

fn default_persist() -> bool {
    true
}
