//! Wire DTOs returned by the items API.
//!
//! DESIGN
//! ======
//! The list endpoint may carry more fields than the summary needs (the backend
//! sends `description` on every row); serde ignores them, so the summary shape
//! stays the contract regardless of what else the server includes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Server-assigned item identifier.
pub type ItemId = i64;

/// A row in the item table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSummary {
    pub id: ItemId,
    pub name: String,
}

/// Full record shown in the detail dialog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetail {
    pub id: ItemId,
    pub name: String,
    pub description: String,
}
