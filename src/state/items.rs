#[cfg(test)]
#[path = "items_test.rs"]
mod items_test;

use crate::net::error::{FetchError, LoadError};
use crate::net::types::{ItemDetail, ItemId, ItemSummary};

/// State owned by the item list view: the table rows, the item shown in the
/// detail dialog, and the last failure message.
///
/// Every write replaces a whole field. A failed load never touches `items` or
/// `selected`; only `error` changes.
#[derive(Clone, Debug, Default)]
pub struct ItemsState {
    pub items: Vec<ItemSummary>,
    pub selected: Option<ItemDetail>,
    pub error: Option<String>,
    pub loading: bool,
    /// Sequence number of the most recently issued detail request.
    detail_seq: u64,
}

/// Handle for one in-flight detail request.
///
/// Only the handle from the latest `begin_detail_load` call can change state
/// when its response arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetailRequest {
    pub id: ItemId,
    seq: u64,
}

/// What happened when a detail response was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailOutcome {
    /// The dialog now shows the fetched item.
    Shown,
    /// The request failed; the error message was set.
    Failed(LoadError),
    /// A newer request was issued meanwhile; the response was dropped.
    Stale,
}

impl ItemsState {
    pub fn begin_list_load(&mut self) {
        self.loading = true;
    }

    /// Apply the list response.
    ///
    /// On success the rows are replaced and any earlier error cleared; the row
    /// count is returned. On failure the rows are kept and the list message is
    /// shown.
    ///
    /// # Errors
    ///
    /// Returns the classified failure so the caller can log it.
    pub fn finish_list_load(&mut self, result: Result<Vec<ItemSummary>, FetchError>) -> Result<usize, LoadError> {
        self.loading = false;
        match result {
            Ok(items) => {
                let count = items.len();
                self.items = items;
                self.error = None;
                Ok(count)
            }
            Err(source) => {
                let err = LoadError::List(source);
                self.error = Some(err.user_message().to_owned());
                Err(err)
            }
        }
    }

    /// Register a new detail request for `id`, superseding any in flight.
    pub fn begin_detail_load(&mut self, id: ItemId) -> DetailRequest {
        self.detail_seq += 1;
        DetailRequest { id, seq: self.detail_seq }
    }

    /// Apply the detail response for `request`.
    pub fn finish_detail_load(
        &mut self,
        request: DetailRequest,
        result: Result<ItemDetail, FetchError>,
    ) -> DetailOutcome {
        if request.seq != self.detail_seq {
            return DetailOutcome::Stale;
        }
        match result {
            Ok(detail) => {
                self.selected = Some(detail);
                self.error = None;
                DetailOutcome::Shown
            }
            Err(source) => {
                let err = LoadError::Detail { id: request.id, source };
                self.error = Some(err.user_message().to_owned());
                DetailOutcome::Failed(err)
            }
        }
    }

    /// Close the detail dialog. Returns `false` if nothing was selected.
    pub fn dismiss(&mut self) -> bool {
        self.selected.take().is_some()
    }

    pub fn is_dialog_open(&self) -> bool {
        self.selected.is_some()
    }
}
