//! The board store: TTL-cached, snapshot-persisted column state.
//!
//! [`BoardStore`] owns the columns-of-projects state behind the
//! project board UI and reconciles it with an injected
//! [`ProjectGateway`](atelier_core::ProjectGateway):
//!
//! - loads are gated behind a cache TTL and fall back to stale columns
//!   when the gateway fails,
//! - create/update/archive are confirm-then-apply (columns change only
//!   after the gateway answers),
//! - reordering is optimistic and local-only,
//! - `{columns, last_fetched}` is persisted through a
//!   [`SnapshotStore`](atelier_core::SnapshotStore) after every change.

pub mod snapshot_fs;
pub mod state;
pub mod store;

pub use snapshot_fs::{FileSnapshotStore, MemorySnapshotStore};
pub use state::BoardState;
pub use store::{BoardStore, DEFAULT_CACHE_TTL_SECS};
