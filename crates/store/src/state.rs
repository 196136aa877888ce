//! Mutable board state carried by the store.

use atelier_core::board::{self, Columns};
use atelier_core::{BoardError, Timestamp};

/// The store's view of the board plus transient bookkeeping flags.
#[derive(Debug, Clone)]
pub struct BoardState {
    /// Column key → ordered projects. Order within a column is drag
    /// position.
    pub columns: Columns,
    /// `true` while a gateway mutation or a blocking (no cached data)
    /// load is in flight.
    pub is_loading: bool,
    /// Last surfaced failure; cleared by any successful operation.
    pub last_error: Option<BoardError>,
    /// When `columns` was last confirmed fresh from the gateway. Gates
    /// re-fetching.
    pub last_fetched: Option<Timestamp>,
}

impl BoardState {
    /// Empty board: nothing loading, no error, never fetched.
    pub fn empty() -> Self {
        Self {
            columns: board::empty_columns(),
            is_loading: false,
            last_error: None,
            last_fetched: None,
        }
    }

    /// `true` when any column holds at least one project.
    pub fn has_cached_data(&self) -> bool {
        !board::board_is_empty(&self.columns)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::empty()
    }
}
