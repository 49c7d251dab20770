//! Convenience result type alias for linkroom.

use crate::error::AppError;

/// A specialized `Result` type for linkroom operations.
pub type AppResult<T> = Result<T, AppError>;
