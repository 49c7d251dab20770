//! Room screen: list, send, copy, and the periodic refresh.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, error, info, warn};

use linkroom_core::traits::LinkStore;
use linkroom_core::types::{Link, RoomCode};
use linkroom_core::util::{ensure_http_url, parse_absolute};

use crate::page::PageLocation;
use crate::poller::{PollTarget, Poller};
use crate::render::render_rows;
use crate::view::{Clipboard, View, ViewUpdate};

/// Shown when send is triggered with an empty URL input.
pub const EMPTY_URL_MESSAGE: &str = "Enter a URL to send.";
/// Shown when the store rejects or cannot take a new link.
pub const SEND_FAILED_MESSAGE: &str = "Failed to send link.";
/// Shown when the room's links cannot be listed.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load links.";
/// Toast after the room link reached the clipboard.
pub const COPIED_MESSAGE: &str = "Copied";
/// Prompt for copying the room link by hand.
pub const MANUAL_COPY_PROMPT: &str = "Copy this room link:";

/// Result of a send action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The link was stored.
    Sent(Link),
    /// The input was rejected before reaching the store.
    Rejected,
    /// The store failed.
    Failed,
}

/// Result of copying the room link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The clipboard accepted the link.
    Copied,
    /// The clipboard failed; the link was offered for manual copy.
    Manual(String),
}

/// Controller for one room. Lives as long as the room is on screen.
pub struct RoomController {
    room: RoomCode,
    page: PageLocation,
    store: Arc<dyn LinkStore>,
    view: Arc<dyn View>,
    clipboard: Arc<dyn Clipboard>,
    poller: Poller,
    shown: Mutex<Vec<Link>>,
    left: AtomicBool,
}

impl RoomController {
    /// Create a controller for `room`, reachable at `page`.
    pub fn new(
        room: RoomCode,
        page: PageLocation,
        store: Arc<dyn LinkStore>,
        view: Arc<dyn View>,
        clipboard: Arc<dyn Clipboard>,
    ) -> Arc<Self> {
        Arc::new(Self {
            room,
            page,
            store,
            view,
            clipboard,
            poller: Poller::new(),
            shown: Mutex::new(Vec::new()),
            left: AtomicBool::new(false),
        })
    }

    /// Show the room screen, start polling, and run the initial load.
    pub async fn enter(self: &Arc<Self>, poll_interval: Duration) {
        info!(room = %self.room, "Entering room");
        self.view.apply(ViewUpdate::Room {
            room: self.room.clone(),
            share_url: self.share_url(),
        });
        self.view.apply(ViewUpdate::SendEnabled(true));

        let this: Weak<Self> = Arc::downgrade(self);
        let target: Weak<dyn PollTarget> = this;
        self.poller.arm(poll_interval, target);
        self.refresh().await;
    }

    /// Stop the periodic refresh. Results of loads still in flight are
    /// dropped instead of rendered.
    pub fn leave(&self) {
        debug!(room = %self.room, "Leaving room");
        self.left.store(true, Ordering::SeqCst);
        self.poller.cancel();
    }

    /// The active room.
    pub fn room(&self) -> &RoomCode {
        &self.room
    }

    /// Address that opens this room.
    pub fn share_url(&self) -> String {
        self.page.to_string()
    }

    /// Whether the periodic refresh is running.
    pub fn is_polling(&self) -> bool {
        self.poller.is_armed()
    }

    /// Fetch the room's links and re-render the list.
    ///
    /// On failure the list keeps its previous rows and an inline error is
    /// shown. Returns whether the list was refreshed.
    pub async fn refresh(&self) -> bool {
        let result = self.store.list(&self.room).await;
        if self.left.load(Ordering::SeqCst) {
            debug!(room = %self.room, "Room was left; discarding list result");
            return false;
        }

        match result {
            Ok(links) => {
                let rows = render_rows(&links, Utc::now());
                *self.shown.lock().unwrap_or_else(PoisonError::into_inner) = links;
                self.view.apply(ViewUpdate::Links(rows));
                true
            }
            Err(e) => {
                error!(room = %self.room, error = %e, status = ?e.status, "Failed to load links");
                self.view
                    .apply(ViewUpdate::Error(Some(LOAD_FAILED_MESSAGE.to_string())));
                false
            }
        }
    }

    /// Validate `raw_url`, store it as a new link from `display_name`, and
    /// refresh the list.
    ///
    /// Input without an `http://`, `https://`, or `//` prefix gets
    /// `https://` prepended. The send control is disabled while the store
    /// call is in flight.
    pub async fn send(&self, raw_url: &str, display_name: &str) -> SendOutcome {
        self.view.apply(ViewUpdate::Error(None));

        let raw = raw_url.trim();
        if raw.is_empty() {
            self.view
                .apply(ViewUpdate::Error(Some(EMPTY_URL_MESSAGE.to_string())));
            return SendOutcome::Rejected;
        }

        let candidate = ensure_http_url(raw);
        if let Err(e) = parse_absolute(&candidate) {
            debug!(input = raw, "Rejected link input");
            self.view.apply(ViewUpdate::Error(Some(e.message)));
            return SendOutcome::Rejected;
        }

        let link = Link::new(&self.room, candidate, display_name, Utc::now());
        self.view.apply(ViewUpdate::SendEnabled(false));
        let outcome = match self.store.create(link).await {
            Ok(stored) => {
                info!(room = %self.room, url = %stored.url, "Link sent");
                self.view.apply(ViewUpdate::ClearUrlInput);
                self.refresh().await;
                SendOutcome::Sent(stored)
            }
            Err(e) => {
                error!(room = %self.room, error = %e, status = ?e.status, "Failed to send link");
                self.view
                    .apply(ViewUpdate::Error(Some(SEND_FAILED_MESSAGE.to_string())));
                SendOutcome::Failed
            }
        };
        self.view.apply(ViewUpdate::SendEnabled(true));
        outcome
    }

    /// Put the room link on the clipboard, falling back to manual copy.
    pub async fn copy_room_link(&self) -> CopyOutcome {
        let link = self.share_url();
        match self.clipboard.write_text(&link).await {
            Ok(()) => {
                self.view.apply(ViewUpdate::Toast(COPIED_MESSAGE.to_string()));
                CopyOutcome::Copied
            }
            Err(e) => {
                warn!(error = %e, "Clipboard unavailable; offering manual copy");
                self.view.apply(ViewUpdate::ManualCopy {
                    prompt: MANUAL_COPY_PROMPT.to_string(),
                    text: link.clone(),
                });
                CopyOutcome::Manual(link)
            }
        }
    }

    /// URL of the link rendered at `index` (zero-based) in the current list.
    pub fn open_link(&self, index: usize) -> Option<String> {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(index)
            .map(|link| link.url.clone())
    }
}

#[async_trait]
impl PollTarget for RoomController {
    async fn poll(&self) {
        self.refresh().await;
    }
}
