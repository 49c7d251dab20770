//! Screen controllers and the session that routes between them.

pub mod landing;
pub mod room;

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{info, warn};

use linkroom_core::config::AppConfig;
use linkroom_core::config::view::ViewConfig;
use linkroom_core::result::AppResult;
use linkroom_store::{LinkStoreManager, Preferences, StoreMode, kv};

use crate::page::PageLocation;
use crate::view::{Clipboard, View, ViewUpdate};

pub use landing::LandingController;
pub use room::{CopyOutcome, RoomController, SendOutcome};

/// The screen a page load resolved to.
pub enum Screen {
    /// No room in the page address.
    Landing(LandingController),
    /// A room is open.
    Room(Arc<RoomController>),
}

/// Process-wide state: the store chosen at startup, preferences, and the
/// front-end seams. Each [`Session::load`] behaves like a fresh page load.
pub struct Session {
    store: LinkStoreManager,
    preferences: Preferences,
    view: Arc<dyn View>,
    clipboard: Arc<dyn Clipboard>,
    config: ViewConfig,
    active: Mutex<Option<Arc<RoomController>>>,
}

impl Session {
    /// Assemble a session from already built parts.
    pub fn new(
        store: LinkStoreManager,
        preferences: Preferences,
        view: Arc<dyn View>,
        clipboard: Arc<dyn Clipboard>,
        config: ViewConfig,
    ) -> Self {
        Self {
            store,
            preferences,
            view,
            clipboard,
            config,
            active: Mutex::new(None),
        }
    }

    /// Open device storage, pick the link store, and build a session.
    pub async fn start(
        config: &AppConfig,
        view: Arc<dyn View>,
        clipboard: Arc<dyn Clipboard>,
    ) -> AppResult<Self> {
        let kv = kv::open(&config.local).await?;
        let store = LinkStoreManager::from_config(config, kv.clone())?;
        info!(mode = %store.mode(), "Session started");
        Ok(Self::new(
            store,
            Preferences::new(kv),
            view,
            clipboard,
            config.view.clone(),
        ))
    }

    /// Which backend serves this session.
    pub fn mode(&self) -> StoreMode {
        self.store.mode()
    }

    /// The configured page address.
    pub fn home(&self) -> AppResult<PageLocation> {
        PageLocation::parse(&self.config.page_url)
    }

    /// Resolve `page` to a screen and show it.
    ///
    /// Any previously open room stops polling first.
    pub async fn load(&self, page: &PageLocation) -> Screen {
        if let Some(previous) = self.slot().take() {
            previous.leave();
        }

        self.view.apply(ViewUpdate::Error(None));
        if self.store.mode().is_local() {
            self.view.apply(ViewUpdate::ConfigWarning);
        }
        match self.preferences.display_name().await {
            Ok(name) if !name.is_empty() => self.view.apply(ViewUpdate::DisplayName(name)),
            Ok(_) => {}
            Err(e) => warn!(error = %e, "Could not read saved display name"),
        }

        match page.room() {
            Some(room) => {
                let controller = RoomController::new(
                    room,
                    page.clone(),
                    Arc::new(self.store.clone()),
                    self.view.clone(),
                    self.clipboard.clone(),
                );
                *self.slot() = Some(controller.clone());
                controller.enter(self.config.poll_interval()).await;
                Screen::Room(controller)
            }
            None => {
                self.view.apply(ViewUpdate::Landing);
                Screen::Landing(LandingController::new(page.clone(), self.view.clone()))
            }
        }
    }

    /// The saved display name, empty when unset or unreadable.
    pub async fn display_name(&self) -> String {
        self.preferences.display_name().await.unwrap_or_else(|e| {
            warn!(error = %e, "Could not read saved display name");
            String::new()
        })
    }

    /// Save the display name as typed.
    pub async fn set_display_name(&self, name: &str) -> AppResult<()> {
        self.preferences.set_display_name(name).await
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<Arc<RoomController>>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
