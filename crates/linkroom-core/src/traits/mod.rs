//! Core traits defined in `linkroom-core` and implemented by other crates.

pub mod key_value;
pub mod link_store;

pub use key_value::KeyValueStore;
pub use link_store::LinkStore;
