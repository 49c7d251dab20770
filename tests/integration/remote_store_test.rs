//! Integration tests for the remote link store against a mock document store.

mod helpers;

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use serde_json::json;

use linkroom_core::error::ErrorKind;
use linkroom_core::traits::LinkStore;
use linkroom_core::types::{Link, RoomCode};
use linkroom_store::kv::MemoryKeyValueStore;
use linkroom_store::{LinkStoreManager, StoreMode};

fn manager(mock: &helpers::MockRestDb) -> LinkStoreManager {
    LinkStoreManager::from_config(&mock.config(), Arc::new(MemoryKeyValueStore::new()))
        .expect("Failed to build store")
}

fn room(code: &str) -> RoomCode {
    RoomCode::parse(code).unwrap()
}

#[tokio::test]
async fn test_configured_remote_is_selected() {
    let mock = helpers::MockRestDb::start().await;
    let store = manager(&mock);
    assert_eq!(store.mode(), StoreMode::Remote);
    assert_eq!(store.provider_type(), "remote");
}

#[tokio::test]
async fn test_create_then_list_round_trip() {
    let mock = helpers::MockRestDb::start().await;
    let store = manager(&mock);
    let alpha = room("alpha");
    let link = Link::new(&alpha, "https://example.com", "kim", Utc::now());

    let created = store.create(link.clone()).await.unwrap();
    assert_eq!(created, link);

    let listed = store.list(&alpha).await.unwrap();
    assert_eq!(listed, vec![link]);
    assert_eq!(mock.records()[0]["_id"], "id0000");
}

#[tokio::test]
async fn test_list_is_oldest_first() {
    let mock = helpers::MockRestDb::start().await;
    let store = manager(&mock);
    let alpha = room("alpha");
    let base = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();

    for (offset, url) in [(2, "https://c.example"), (0, "https://a.example"), (1, "https://b.example")] {
        let link = Link::new(&alpha, url, "kim", base + Duration::seconds(offset));
        store.create(link).await.unwrap();
    }

    let urls: Vec<String> = store
        .list(&alpha)
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.url)
        .collect();
    assert_eq!(urls, ["https://a.example", "https://b.example", "https://c.example"]);
}

#[tokio::test]
async fn test_rooms_are_isolated() {
    let mock = helpers::MockRestDb::start().await;
    let store = manager(&mock);
    store
        .create(Link::new(&room("alpha"), "https://a.example", "kim", Utc::now()))
        .await
        .unwrap();

    assert!(store.list(&room("beta")).await.unwrap().is_empty());
    assert_eq!(store.list(&room("alpha")).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_requests_carry_credentials_and_no_cache() {
    let mock = helpers::MockRestDb::start().await;
    let store = manager(&mock);
    store.list(&room("alpha")).await.unwrap();
    store
        .create(Link::new(&room("alpha"), "https://a.example", "", Utc::now()))
        .await
        .unwrap();

    assert_eq!(mock.api_keys(), vec![helpers::TEST_API_KEY; 2]);
    assert_eq!(mock.cache_controls(), vec!["no-cache"; 2]);
}

#[tokio::test]
async fn test_malformed_records_are_skipped() {
    let mock = helpers::MockRestDb::start().await;
    mock.seed(json!({ "room": "alpha", "sender": "no url" }));
    mock.seed(json!({
        "_id": "x1",
        "room": "alpha",
        "url": "https://kept.example",
        "createdAt": "2026-10-19T09:00:00.000Z"
    }));
    let store = manager(&mock);

    let links = store.list(&room("alpha")).await.unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].url, "https://kept.example");
    assert_eq!(links[0].display_sender(), "Anon");
}

#[tokio::test]
async fn test_error_status_is_store_unavailable() {
    let mock = helpers::MockRestDb::start().await;
    let store = manager(&mock);
    mock.fail_with(Some(500));

    let err = store.list(&room("alpha")).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::StoreUnavailable);
    assert_eq!(err.status, Some(500));

    let err = store
        .create(Link::new(&room("alpha"), "https://a.example", "kim", Utc::now()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::StoreUnavailable);
    assert_eq!(err.status, Some(500));
    assert!(mock.records().is_empty());
}

#[tokio::test]
async fn test_non_array_list_reads_as_empty() {
    let mock = helpers::MockRestDb::start().await;
    let store = manager(&mock);
    mock.answer_wrong_shape();

    assert!(store.list(&room("alpha")).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_non_object_create_is_store_unavailable() {
    let mock = helpers::MockRestDb::start().await;
    let store = manager(&mock);
    mock.answer_wrong_shape();

    let err = store
        .create(Link::new(&room("alpha"), "https://a.example", "kim", Utc::now()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::StoreUnavailable);
    assert!(mock.records().is_empty());
}

#[tokio::test]
async fn test_unreachable_store_is_store_unavailable() {
    let config = linkroom_core::config::AppConfig::from_toml_str(
        r#"
        [remote]
        base_url = "http://127.0.0.1:9/rest"
        api_key = "test-key-1234"
        "#,
    )
    .unwrap();
    let store = LinkStoreManager::from_config(&config, Arc::new(MemoryKeyValueStore::new())).unwrap();

    let err = store.list(&room("alpha")).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::StoreUnavailable);
    assert_eq!(err.status, None);
}
