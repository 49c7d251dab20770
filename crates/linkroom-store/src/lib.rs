//! # linkroom-store
//!
//! Link store implementations for linkroom:
//!
//! - **remote**: a restdb-style document collection reached over HTTP
//! - **local**: per-room JSON lists in an on-device key/value store
//!
//! The backend is selected once at startup from configuration by
//! [`LinkStoreManager`].

pub mod keys;
pub mod kv;
pub mod manager;
pub mod preferences;
pub mod providers;

pub use manager::{LinkStoreManager, StoreMode};
pub use preferences::Preferences;
