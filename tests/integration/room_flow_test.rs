//! Integration tests for the room screen against a mock document store.

mod helpers;

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use linkroom_core::types::RoomCode;
use linkroom_view::controller::room::{LOAD_FAILED_MESSAGE, SEND_FAILED_MESSAGE};
use linkroom_view::render::EMPTY_ROOM_TEXT;
use linkroom_view::{CopyOutcome, ListRow, PageLocation, Screen, SendOutcome, Session, ViewUpdate};

async fn open_room(
    mock: &helpers::MockRestDb,
    view: Arc<helpers::RecordingView>,
    clipboard: helpers::TestClipboard,
    room: &str,
) -> (Session, Arc<linkroom_view::RoomController>) {
    let mut config = mock.config();
    config.local.persist = false;
    let session = Session::start(&config, view, Arc::new(clipboard))
        .await
        .expect("Failed to start session");
    let page = session
        .home()
        .unwrap()
        .with_room(&RoomCode::parse(room).unwrap());
    let Screen::Room(controller) = session.load(&page).await else {
        panic!("expected room screen");
    };
    (session, controller)
}

#[tokio::test]
async fn test_entering_empty_room_shows_placeholder() {
    let mock = helpers::MockRestDb::start().await;
    let view = Arc::new(helpers::RecordingView::default());
    let (_session, room) = open_room(&mock, view.clone(), Default::default(), "Alpha").await;

    assert_eq!(room.room().as_str(), "alpha");
    let updates = view.updates();
    assert!(!updates.contains(&ViewUpdate::ConfigWarning));
    assert!(updates.contains(&ViewUpdate::Room {
        room: room.room().clone(),
        share_url: "http://localhost/?room=alpha".to_string(),
    }));
    assert_eq!(view.last_links(), Some(vec![ListRow::Placeholder]));
    assert_eq!(EMPTY_ROOM_TEXT, "No links yet. Be the first to send one!");
}

#[tokio::test]
async fn test_send_stores_coerced_url_and_rerenders() {
    let mock = helpers::MockRestDb::start().await;
    let view = Arc::new(helpers::RecordingView::default());
    let (session, room) = open_room(&mock, view.clone(), Default::default(), "alpha").await;
    session.set_display_name("  kim  ").await.unwrap();

    let outcome = room.send("example.com/page", &session.display_name().await).await;
    assert!(matches!(outcome, SendOutcome::Sent(_)));

    let records = mock.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["url"], "https://example.com/page");
    assert_eq!(records[0]["sender"], "kim");
    assert_eq!(records[0]["room"], "alpha");

    let rows = view.last_links().unwrap();
    let row = rows[0].as_link().unwrap();
    assert_eq!(row.url, "https://example.com/page");
    assert!(row.meta.starts_with("kim • "));
    assert!(view.updates().contains(&ViewUpdate::ClearUrlInput));
}

#[tokio::test]
async fn test_links_from_other_clients_appear_on_refresh() {
    let mock = helpers::MockRestDb::start().await;
    let view = Arc::new(helpers::RecordingView::default());
    let (_session, room) = open_room(&mock, view.clone(), Default::default(), "alpha").await;

    mock.seed(json!({
        "_id": "other",
        "room": "alpha",
        "url": "https://elsewhere.example",
        "sender": "lee",
        "createdAt": "2026-10-19T09:00:00.000Z"
    }));
    assert!(room.refresh().await);
    assert_eq!(room.open_link(0).as_deref(), Some("https://elsewhere.example"));
}

#[tokio::test]
async fn test_failed_list_keeps_previous_rows() {
    let mock = helpers::MockRestDb::start().await;
    let view = Arc::new(helpers::RecordingView::default());
    let (session, room) = open_room(&mock, view.clone(), Default::default(), "alpha").await;
    room.send("https://kept.example", &session.display_name().await).await;

    mock.fail_with(Some(500));
    view.clear();
    assert!(!room.refresh().await);

    assert_eq!(
        view.updates(),
        vec![ViewUpdate::Error(Some(LOAD_FAILED_MESSAGE.to_string()))]
    );
    assert_eq!(room.open_link(0).as_deref(), Some("https://kept.example"));
}

#[tokio::test]
async fn test_failed_send_reports_and_reenables() {
    let mock = helpers::MockRestDb::start().await;
    let view = Arc::new(helpers::RecordingView::default());
    let (_session, room) = open_room(&mock, view.clone(), Default::default(), "alpha").await;

    mock.fail_with(Some(503));
    view.clear();
    assert_eq!(room.send("https://lost.example", "kim").await, SendOutcome::Failed);

    let updates = view.updates();
    assert!(updates.contains(&ViewUpdate::Error(Some(SEND_FAILED_MESSAGE.to_string()))));
    assert_eq!(updates.last(), Some(&ViewUpdate::SendEnabled(true)));
    assert!(!updates.contains(&ViewUpdate::ClearUrlInput));
}

#[tokio::test]
async fn test_copy_room_link() {
    let mock = helpers::MockRestDb::start().await;
    let view = Arc::new(helpers::RecordingView::default());
    let (_session, room) = open_room(&mock, view.clone(), Default::default(), "alpha").await;
    assert_eq!(room.copy_room_link().await, CopyOutcome::Copied);

    let broken = helpers::TestClipboard {
        broken: true,
        ..Default::default()
    };
    let (_session, room) = open_room(&mock, view.clone(), broken, "alpha").await;
    assert_eq!(
        room.copy_room_link().await,
        CopyOutcome::Manual("http://localhost/?room=alpha".to_string())
    );
}

#[tokio::test]
async fn test_poll_picks_up_new_links() {
    let mock = helpers::MockRestDb::start().await;
    let view = Arc::new(helpers::RecordingView::default());
    let mut config = mock.config();
    config.local.persist = false;
    config.view.poll_interval_ms = 50;
    let session = Session::start(&config, view.clone(), Arc::new(helpers::TestClipboard::default()))
        .await
        .unwrap();
    let page = PageLocation::parse("http://localhost/?room=alpha").unwrap();
    let Screen::Room(room) = session.load(&page).await else {
        panic!("expected room screen");
    };

    mock.seed(json!({
        "room": "alpha",
        "url": "https://polled.example",
        "createdAt": "2026-10-19T09:00:00.000Z"
    }));

    let mut found = false;
    for _ in 0..40 {
        tokio::time::sleep(Duration::from_millis(25)).await;
        if room.open_link(0).is_some() {
            found = true;
            break;
        }
    }
    assert!(found, "poller did not refresh the room");
    room.leave();
}
