//! Shared test helpers for integration tests.
//!
//! [`MockRestDb`] is an in-process stand-in for the remote document store:
//! one `links` collection that honours the `q` room filter and the
//! `sort`/`dir` ordering, and can be switched to answer every request with
//! an error status or with a body of the wrong JSON shape.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Json;
use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::task::JoinHandle;

use linkroom_core::config::AppConfig;
use linkroom_core::error::AppError;
use linkroom_core::result::AppResult;
use linkroom_view::{Clipboard, View, ViewUpdate};

/// API key configured for tests.
pub const TEST_API_KEY: &str = "test-key-1234";

#[derive(Default)]
struct MockState {
    records: Mutex<Vec<Value>>,
    failure: Mutex<Option<StatusCode>>,
    api_keys: Mutex<Vec<String>>,
    cache_controls: Mutex<Vec<String>>,
    next_id: AtomicUsize,
    wrong_shape: AtomicBool,
}

impl MockState {
    fn observe(&self, headers: &HeaderMap) {
        let value = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string()
        };
        self.api_keys.lock().unwrap().push(value("x-apikey"));
        self.cache_controls.lock().unwrap().push(value("cache-control"));
    }

    fn failure(&self) -> Option<Response> {
        self.failure
            .lock()
            .unwrap()
            .map(|status| (status, "mock failure").into_response())
    }
}

/// Running mock document store.
pub struct MockRestDb {
    addr: SocketAddr,
    state: Arc<MockState>,
    task: JoinHandle<()>,
}

impl MockRestDb {
    /// Start the mock on an ephemeral local port.
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new()
            .route("/rest/links", get(list_links).post(create_link))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock listener");
        let addr = listener.local_addr().expect("Mock listener has no address");
        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock server failed");
        });

        Self { addr, state, task }
    }

    /// Base REST address to configure.
    pub fn base_url(&self) -> String {
        format!("http://{}/rest", self.addr)
    }

    /// Configuration selecting this mock as the remote store.
    pub fn config(&self) -> AppConfig {
        AppConfig::from_toml_str(&format!(
            r#"
            [remote]
            base_url = "{}"
            api_key = "{}"

            [view]
            page_url = "http://localhost/"
            "#,
            self.base_url(),
            TEST_API_KEY
        ))
        .expect("Failed to build test config")
    }

    /// Answer every request with `status`, or behave normally with `None`.
    pub fn fail_with(&self, status: Option<u16>) {
        *self.state.failure.lock().unwrap() =
            status.map(|s| StatusCode::from_u16(s).expect("Invalid status"));
    }

    /// Answer list with an object and create with an array, storing nothing.
    pub fn answer_wrong_shape(&self) {
        self.state.wrong_shape.store(true, Ordering::SeqCst);
    }

    /// Insert a raw record as if another client had created it.
    pub fn seed(&self, record: Value) {
        self.state.records.lock().unwrap().push(record);
    }

    /// Every stored record, in insertion order.
    pub fn records(&self) -> Vec<Value> {
        self.state.records.lock().unwrap().clone()
    }

    /// `x-apikey` values seen, one per request.
    pub fn api_keys(&self) -> Vec<String> {
        self.state.api_keys.lock().unwrap().clone()
    }

    /// `cache-control` values seen, one per request.
    pub fn cache_controls(&self) -> Vec<String> {
        self.state.cache_controls.lock().unwrap().clone()
    }
}

impl Drop for MockRestDb {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn list_links(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.observe(&headers);
    if let Some(failure) = state.failure() {
        return failure;
    }
    if state.wrong_shape.load(Ordering::SeqCst) {
        return Json(json!({})).into_response();
    }

    let room = params
        .get("q")
        .and_then(|q| serde_json::from_str::<Value>(q).ok())
        .and_then(|q| q.get("room").and_then(Value::as_str).map(str::to_string));

    let mut items: Vec<Value> = state
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|record| match &room {
            Some(room) => record.get("room").and_then(Value::as_str) == Some(room.as_str()),
            None => true,
        })
        .cloned()
        .collect();

    if params.get("sort").map(String::as_str) == Some("createdAt") {
        items.sort_by(|a, b| {
            let key = |v: &Value| {
                v.get("createdAt")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string()
            };
            key(a).cmp(&key(b))
        });
        if params.get("dir").map(String::as_str) == Some("-1") {
            items.reverse();
        }
    }

    Json(items).into_response()
}

async fn create_link(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(mut record): Json<Value>,
) -> Response {
    state.observe(&headers);
    if let Some(failure) = state.failure() {
        return failure;
    }
    if state.wrong_shape.load(Ordering::SeqCst) {
        return (StatusCode::CREATED, Json(json!([]))).into_response();
    }

    let id = state.next_id.fetch_add(1, Ordering::SeqCst);
    if let Value::Object(fields) = &mut record {
        fields.insert("_id".to_string(), json!(format!("id{id:04}")));
    }
    state.records.lock().unwrap().push(record.clone());
    (StatusCode::CREATED, Json(record)).into_response()
}

/// View that records every update.
#[derive(Default)]
pub struct RecordingView {
    updates: Mutex<Vec<ViewUpdate>>,
}

impl RecordingView {
    /// Updates received so far.
    pub fn updates(&self) -> Vec<ViewUpdate> {
        self.updates.lock().unwrap().clone()
    }

    /// Forget recorded updates.
    pub fn clear(&self) {
        self.updates.lock().unwrap().clear();
    }

    /// The most recent link list.
    pub fn last_links(&self) -> Option<Vec<linkroom_view::ListRow>> {
        self.updates().into_iter().rev().find_map(|u| match u {
            ViewUpdate::Links(rows) => Some(rows),
            _ => None,
        })
    }
}

impl View for RecordingView {
    fn apply(&self, update: ViewUpdate) {
        self.updates.lock().unwrap().push(update);
    }
}

/// Clipboard that records what was copied, or always fails.
#[derive(Default)]
pub struct TestClipboard {
    pub broken: bool,
    pub copied: Mutex<Vec<String>>,
}

#[async_trait]
impl Clipboard for TestClipboard {
    async fn write_text(&self, text: &str) -> AppResult<()> {
        if self.broken {
            return Err(AppError::clipboard("clipboard unavailable"));
        }
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
