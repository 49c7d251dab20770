//! Key/value trait standing in for per-device persisted storage.

use async_trait::async_trait;

use crate::result::AppResult;

/// String key/value storage scoped to one device.
///
/// Values are opaque strings (JSON for link lists). There is no locking:
/// a read-modify-write by two writers on the same key may lose one update.
#[async_trait]
pub trait KeyValueStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the backend type name (e.g., "file", "memory").
    fn backend_type(&self) -> &str;

    /// Get a value by key. Returns `None` if the key was never written.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Set a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove a key. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> AppResult<()>;
}
