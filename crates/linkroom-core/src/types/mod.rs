//! Shared domain types.

pub mod link;
pub mod room;

pub use link::Link;
pub use room::RoomCode;
