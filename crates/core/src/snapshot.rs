//! Snapshot persistence seam.

use serde::{Deserialize, Serialize};

use crate::board::Columns;
use crate::error::BoardError;
use crate::types::Timestamp;

/// Durable image of the board state.
///
/// Only `columns` and `last_fetched` are persisted; the loading and
/// error flags are transient and never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub columns: Columns,
    pub last_fetched: Option<Timestamp>,
}

/// Durable client-side slot the store saves itself into.
///
/// Persistence is best-effort: the store logs and continues when a
/// save fails, and a missing or unusable snapshot loads as `None`.
pub trait SnapshotStore: Send + Sync {
    /// Load the last saved snapshot, or `None` if nothing usable
    /// exists.
    fn load(&self) -> Result<Option<BoardSnapshot>, BoardError>;

    /// Persist `snapshot`, replacing any previous one.
    fn save(&self, snapshot: &BoardSnapshot) -> Result<(), BoardError>;
}
