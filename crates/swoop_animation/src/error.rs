//! Launch error types

use thiserror::Error;

/// Errors raised synchronously by target-based launches, before any overlay
/// is mounted. Malformed numeric config (zero durations, negative ranges) is
/// deliberately not validated; it degrades visually instead of failing.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchError {
    /// The origin target did not resolve to a mounted element
    #[error("origin target is not mounted")]
    OriginNotFound,

    /// The destination target did not resolve to a mounted element
    #[error("destination target is not mounted")]
    DestinationNotFound,
}

/// Result type for launch operations
pub type Result<T> = std::result::Result<T, LaunchError>;
