//! Small text utilities shared by the store and view crates.

pub mod time_ago;
pub mod url;

pub use self::time_ago::{time_ago, time_ago_now};
pub use self::url::{ensure_http_url, parse_absolute};
