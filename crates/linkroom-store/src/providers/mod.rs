//! Link store implementations.

pub mod local;
pub mod remote;

pub use local::LocalLinkStore;
pub use remote::RemoteLinkStore;
