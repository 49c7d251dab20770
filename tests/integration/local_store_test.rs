//! Integration tests for local mode: on-device links and preferences that
//! survive a restart.

mod helpers;

use std::sync::Arc;

use chrono::Utc;

use linkroom_core::config::AppConfig;
use linkroom_core::traits::LinkStore;
use linkroom_core::types::{Link, RoomCode};
use linkroom_store::{LinkStoreManager, Preferences, StoreMode, kv};
use linkroom_view::{Screen, Session, ViewUpdate};

fn local_config(dir: &tempfile::TempDir) -> AppConfig {
    AppConfig::from_toml_str(&format!(
        r#"
        [local]
        data_dir = "{}"
        persist = true
        "#,
        dir.path().display().to_string().replace('\\', "/")
    ))
    .unwrap()
}

#[tokio::test]
async fn test_links_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = local_config(&dir);
    let alpha = RoomCode::parse("alpha").unwrap();
    let link = Link::new(&alpha, "https://kept.example", "kim", Utc::now());

    {
        let store = LinkStoreManager::from_config(&config, kv::open(&config.local).await.unwrap()).unwrap();
        assert_eq!(store.mode(), StoreMode::Local);
        store.create(link.clone()).await.unwrap();
    }

    let store = LinkStoreManager::from_config(&config, kv::open(&config.local).await.unwrap()).unwrap();
    assert_eq!(store.list(&alpha).await.unwrap(), vec![link]);
}

#[tokio::test]
async fn test_display_name_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = local_config(&dir);

    Preferences::new(kv::open(&config.local).await.unwrap())
        .set_display_name(" kim ")
        .await
        .unwrap();

    let view = Arc::new(helpers::RecordingView::default());
    let session = Session::start(&config, view.clone(), Arc::new(helpers::TestClipboard::default()))
        .await
        .unwrap();
    let screen = session.load(&session.home().unwrap()).await;

    assert!(matches!(screen, Screen::Landing(_)));
    assert_eq!(
        view.updates(),
        vec![
            ViewUpdate::Error(None),
            ViewUpdate::ConfigWarning,
            ViewUpdate::DisplayName("kim".to_string()),
            ViewUpdate::Landing,
        ]
    );
}
