//! Failure taxonomy for item fetches.
//!
//! ERROR HANDLING
//! ==============
//! `FetchError` describes why one HTTP round trip failed. `LoadError` says
//! which user-visible operation it broke. Both are absorbed by the list view:
//! logged, mapped to a fixed message, never propagated further.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ItemId;

/// Shown when the item list cannot be loaded.
pub const LIST_LOAD_FAILED_MESSAGE: &str = "Failed to load data. Please try again later.";

/// Shown when a single item's details cannot be loaded.
pub const DETAIL_LOAD_FAILED_MESSAGE: &str = "Failed to load item details.";

/// Why a single request did not produce a usable body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(String),
}

/// A failed list or detail load.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("failed to fetch items: {0}")]
    List(FetchError),
    #[error("failed to fetch item {id}: {source}")]
    Detail { id: ItemId, source: FetchError },
}

impl LoadError {
    /// Fixed message rendered above the table for this kind of failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::List(_) => LIST_LOAD_FAILED_MESSAGE,
            Self::Detail { .. } => DETAIL_LOAD_FAILED_MESSAGE,
        }
    }
}
