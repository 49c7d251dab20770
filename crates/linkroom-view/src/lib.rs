//! # linkroom-view
//!
//! Front-end independent room view logic: the landing/room state machine,
//! user actions (send, refresh, copy link, join/create room), the poller
//! that keeps the active room fresh, and rendering of the link list.
//!
//! A front-end supplies a [`View`] that receives [`ViewUpdate`]s and a
//! [`Clipboard`] capability, then drives a [`Session`].

pub mod controller;
pub mod page;
pub mod poller;
pub mod render;
pub mod view;

pub use controller::{CopyOutcome, LandingController, RoomController, Screen, SendOutcome, Session};
pub use page::PageLocation;
pub use poller::{PollTarget, Poller};
pub use render::{LinkRow, ListRow};
pub use view::{Clipboard, View, ViewUpdate};
