//! Remote link store backed by a restdb-style document collection.
//!
//! Every room is a query filter on one shared collection:
//!
//! - list: `GET {base}/{collection}?q={"room":"<room>"}&sort=createdAt&dir=1`
//! - create: `POST {base}/{collection}` with one link as the JSON body
//!
//! Both requests carry `content-type: application/json`, the `x-apikey`
//! credential, and `cache-control: no-cache`. A failed request is reported
//! once; there is no retry.

use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use linkroom_core::config::remote::RemoteStoreConfig;
use linkroom_core::error::{AppError, ErrorKind};
use linkroom_core::result::AppResult;
use linkroom_core::traits::LinkStore;
use linkroom_core::types::{Link, RoomCode};

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-apikey";

/// HTTP client for the remote links collection.
#[derive(Debug, Clone)]
pub struct RemoteLinkStore {
    client: reqwest::Client,
    /// `{base}/{collection}` with no trailing slash on the base.
    collection_url: Url,
}

impl RemoteLinkStore {
    /// Build a store from configuration.
    ///
    /// Fails with a configuration error when the base URL or API key is
    /// missing, or when either cannot be used in a request.
    pub fn new(config: &RemoteStoreConfig) -> AppResult<Self> {
        let base_url = config
            .base_url
            .as_deref()
            .ok_or_else(|| AppError::configuration("remote.base_url is not set"))?;
        let api_key = config
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::configuration("remote.api_key is not set"))?;

        let base = base_url.trim().strip_suffix('/').unwrap_or(base_url.trim());
        let collection = config.collections.links.trim_matches('/');
        let collection_url = Url::parse(&format!("{base}/{collection}")).map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Invalid remote.base_url: {base_url}"),
                e,
            )
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        let key_value = HeaderValue::from_str(api_key.trim()).map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                "remote.api_key is not a valid header value",
                e,
            )
        })?;
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key_value);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            client,
            collection_url,
        })
    }

    /// Address of the links collection.
    pub fn collection_url(&self) -> &Url {
        &self.collection_url
    }

    /// Address of the filtered, sorted listing for `room`.
    fn list_url(&self, room: &RoomCode) -> Url {
        let filter = serde_json::json!({ "room": room.as_str() }).to_string();
        let mut url = self.collection_url.clone();
        url.query_pairs_mut()
            .append_pair("q", &filter)
            .append_pair("sort", "createdAt")
            .append_pair("dir", "1");
        url
    }

    /// Send a request and return the body of a successful response.
    async fn execute(&self, request: reqwest::RequestBuilder, op: &str) -> AppResult<Value> {
        let response = request.send().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::StoreUnavailable,
                format!("Remote {op} request failed"),
                e,
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::store_unavailable(format!(
                "Remote {op} failed: HTTP {}",
                status.as_u16()
            ))
            .with_status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::StoreUnavailable,
                format!("Remote {op} response could not be read"),
                e,
            )
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            AppError::with_source(
                ErrorKind::StoreUnavailable,
                format!("Remote {op} response is not JSON"),
                e,
            )
        })
    }
}

#[async_trait]
impl LinkStore for RemoteLinkStore {
    fn provider_type(&self) -> &str {
        "remote"
    }

    async fn list(&self, room: &RoomCode) -> AppResult<Vec<Link>> {
        let url = self.list_url(room);
        let body = self.execute(self.client.get(url), "list").await?;

        let Value::Array(items) = body else {
            warn!(%room, "Remote list response is not an array; treating as empty");
            return Ok(Vec::new());
        };

        let total = items.len();
        let links: Vec<Link> = items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<Link>(item) {
                Ok(link) => Some(link),
                Err(e) => {
                    warn!(%room, error = %e, "Skipping malformed remote link record");
                    None
                }
            })
            .collect();

        debug!(%room, total, decoded = links.len(), "Listed remote links");
        Ok(links)
    }

    async fn create(&self, link: Link) -> AppResult<Link> {
        let payload = serde_json::to_vec(&link)?;
        let request = self
            .client
            .post(self.collection_url.clone())
            .body(payload);
        let body = self.execute(request, "create").await?;

        let Value::Object(stored) = body else {
            return Err(AppError::store_unavailable(
                "Remote create response is not a JSON object",
            ));
        };

        let id = stored.get("_id").and_then(Value::as_str).unwrap_or("-");
        debug!(room = %link.room, id, "Created remote link");
        // The request payload stays authoritative for caller-supplied fields.
        Ok(link)
    }
}
