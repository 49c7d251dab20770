//! Landing screen: create or join a room.

use std::sync::Arc;

use tracing::{debug, info};

use linkroom_core::types::RoomCode;

use crate::page::PageLocation;
use crate::view::{View, ViewUpdate};

/// Controller for the landing screen.
pub struct LandingController {
    page: PageLocation,
    view: Arc<dyn View>,
}

impl LandingController {
    /// Create a landing controller for `page`.
    pub fn new(page: PageLocation, view: Arc<dyn View>) -> Self {
        Self { page, view }
    }

    /// Location of a freshly generated room.
    pub fn create_room(&self) -> PageLocation {
        let room = RoomCode::generate();
        info!(room = %room, "Created room");
        self.page.with_room(&room)
    }

    /// Location of the room typed by the user, or `None` after showing an
    /// error when the input normalizes to nothing.
    pub fn join_room(&self, input: &str) -> Option<PageLocation> {
        match RoomCode::parse(input) {
            Ok(room) => {
                debug!(room = %room, "Joining room");
                self.view.apply(ViewUpdate::Error(None));
                Some(self.page.with_room(&room))
            }
            Err(e) => {
                self.view.apply(ViewUpdate::Error(Some(e.message)));
                None
            }
        }
    }
}
