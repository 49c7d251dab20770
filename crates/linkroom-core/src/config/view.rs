//! Page and polling configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings for the room page: where share links point and how often the
/// active room is re-listed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Base page address; the room code is carried in its `room` query parameter.
    #[serde(default = "default_page_url")]
    pub page_url: String,
    /// Interval between automatic refreshes of the active room, in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl ViewConfig {
    /// The polling interval as a [`Duration`]. Zero is raised to one millisecond.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_url: default_page_url(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

fn default_page_url() -> String {
    "http://localhost/".to_string()
}

fn default_poll_interval_ms() -> u64 {
    2500
}
