//! # linkroom-core
//!
//! Core crate for linkroom. Contains the link store and key/value traits,
//! configuration schemas, the `Link` and `RoomCode` types, the small text
//! utilities (time-ago formatting, URL coercion), and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other linkroom crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;
pub mod util;

pub use error::AppError;
pub use result::AppResult;
pub use types::{Link, RoomCode};
