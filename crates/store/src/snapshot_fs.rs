//! File-backed and in-memory snapshot stores.
//!
//! The file store serializes the board to pretty JSON under a data
//! directory. The schema version is part of the file name: bumping
//! [`SNAPSHOT_VERSION`] orphans old snapshots (new key, no migration).

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use atelier_core::snapshot::{BoardSnapshot, SnapshotStore};
use atelier_core::BoardError;

/// Base name of the snapshot file.
pub const SNAPSHOT_KEY: &str = "project-board";

/// Schema version baked into the snapshot file name.
pub const SNAPSHOT_VERSION: &str = "v2";

// ---------------------------------------------------------------------------
// FileSnapshotStore
// ---------------------------------------------------------------------------

/// [`SnapshotStore`] writing `<dir>/<KEY>.<VERSION>.json`.
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    /// Snapshot store rooted at `dir`, creating the directory if
    /// needed.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, BoardError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)
            .map_err(|e| BoardError::Transient(format!("create {}: {e}", dir.display())))?;
        Ok(Self {
            path: dir.join(format!("{SNAPSHOT_KEY}.{SNAPSHOT_VERSION}.json")),
        })
    }

    /// Full path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> Result<Option<BoardSnapshot>, BoardError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(BoardError::Transient(format!(
                    "read {}: {e}",
                    self.path.display()
                )))
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Discarding unreadable board snapshot"
                );
                Ok(None)
            }
        }
    }

    fn save(&self, snapshot: &BoardSnapshot) -> Result<(), BoardError> {
        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| BoardError::Transient(format!("encode snapshot: {e}")))?;

        // Write-then-rename so a crash mid-write never corrupts the
        // previous snapshot.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .map_err(|e| BoardError::Transient(format!("write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| BoardError::Transient(format!("rename {}: {e}", self.path.display())))?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MemorySnapshotStore
// ---------------------------------------------------------------------------

/// In-memory [`SnapshotStore`] for tests and ephemeral runs.
#[derive(Default)]
pub struct MemorySnapshotStore {
    slot: Mutex<Option<BoardSnapshot>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot currently held, if any.
    pub fn current(&self) -> Option<BoardSnapshot> {
        self.slot.lock().expect("snapshot slot poisoned").clone()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> Result<Option<BoardSnapshot>, BoardError> {
        Ok(self.slot.lock().expect("snapshot slot poisoned").clone())
    }

    fn save(&self, snapshot: &BoardSnapshot) -> Result<(), BoardError> {
        *self.slot.lock().expect("snapshot slot poisoned") = Some(snapshot.clone());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
