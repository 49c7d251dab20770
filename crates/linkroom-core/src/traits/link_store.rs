//! Link store trait shared by the remote and local backends.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{Link, RoomCode};

/// Storage contract for shared links.
///
/// Implementations exist for a remote document store reached over HTTP and
/// for on-device key/value storage. Callers see identical behaviour from
/// both; the backend is chosen once at startup.
#[async_trait]
pub trait LinkStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "remote", "local").
    fn provider_type(&self) -> &str;

    /// List the links of `room` in ascending creation order.
    ///
    /// Transport or decoding failures surface as
    /// [`ErrorKind::StoreUnavailable`](crate::error::ErrorKind::StoreUnavailable).
    async fn list(&self, room: &RoomCode) -> AppResult<Vec<Link>>;

    /// Store `link` and return the stored record.
    ///
    /// Callers must not rely on any server-assigned field.
    async fn create(&self, link: Link) -> AppResult<Link>;
}
