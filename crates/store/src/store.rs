//! The board store: cached column state reconciled against the
//! gateway.
//!
//! Two mutation disciplines coexist and stay as separate code paths:
//! reordering is optimistic and local-only, while create, update, and
//! archive are confirm-then-apply — `columns` changes only once the
//! gateway has answered, so no rollback path exists or is needed.
//!
//! A background `load_projects` that resolves mid-drag replaces
//! `columns` wholesale, manual reorder included. The original board
//! behaves the same way; no reconciliation policy is imposed here.

use std::sync::Arc;

use chrono::{Duration, Utc};

use atelier_core::board::{self, Columns};
use atelier_core::snapshot::{BoardSnapshot, SnapshotStore};
use atelier_core::status::{ColumnKey, ProjectStatus};
use atelier_core::{
    BoardError, CreateProject, ProjectGateway, ProjectRecord, Timestamp, UpdateProject,
};

use crate::state::BoardState;

/// Cache lifetime of a confirmed fetch, in seconds. A tuning constant,
/// not a correctness invariant.
pub const DEFAULT_CACHE_TTL_SECS: i64 = 60;

/// Client-side store for the project board.
///
/// Holds the authoritative column state, gates refetches behind a
/// cache TTL, and persists a `{columns, last_fetched}` snapshot after
/// every change. Dependencies are injected; construct one per process
/// at the composition root. All operations take `&mut self` — the
/// discipline is a single owner sequenced through named operations,
/// not locks.
pub struct BoardStore {
    gateway: Arc<dyn ProjectGateway>,
    snapshots: Arc<dyn SnapshotStore>,
    ttl: Duration,
    state: BoardState,
}

impl BoardStore {
    /// Build a store and rehydrate it from the last saved snapshot.
    ///
    /// A missing snapshot yields an empty board; an unreadable one is
    /// discarded with a warning. Rehydrated columns serve the first
    /// paint without waiting for a gateway round-trip.
    pub fn new(gateway: Arc<dyn ProjectGateway>, snapshots: Arc<dyn SnapshotStore>) -> Self {
        let mut state = BoardState::empty();
        match snapshots.load() {
            Ok(Some(snapshot)) => {
                state.columns = snapshot.columns;
                board::ensure_all_columns(&mut state.columns);
                state.last_fetched = snapshot.last_fetched;
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load board snapshot, starting empty");
            }
        }
        Self {
            gateway,
            snapshots,
            ttl: Duration::seconds(DEFAULT_CACHE_TTL_SECS),
            state,
        }
    }

    /// Override the cache TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    // -----------------------------------------------------------------------
    // Read access
    // -----------------------------------------------------------------------

    pub fn columns(&self) -> &Columns {
        &self.state.columns
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn last_error(&self) -> Option<&BoardError> {
        self.state.last_error.as_ref()
    }

    pub fn last_fetched(&self) -> Option<Timestamp> {
        self.state.last_fetched
    }

    // -----------------------------------------------------------------------
    // Load
    // -----------------------------------------------------------------------

    /// Fetch all projects and regroup them into columns.
    ///
    /// Within the TTL, and without `force_refresh`, this is a no-op
    /// serving the cached columns. With cached data present a failed
    /// fetch is swallowed (`Ok(())`, state untouched apart from the
    /// loading flag): stale columns beat a visible error. Only a
    /// failure with nothing to fall back to sets `last_error` and
    /// returns it.
    pub async fn load_projects(&mut self, force_refresh: bool) -> Result<(), BoardError> {
        if !force_refresh && self.state.has_cached_data() && self.is_fresh() {
            tracing::debug!("Serving project columns from cache");
            return Ok(());
        }

        let had_cache = self.state.has_cached_data();
        if !had_cache {
            // Blocking load: nothing to show while we wait.
            self.state.is_loading = true;
            self.state.last_error = None;
        }

        match self.gateway.fetch_all().await {
            Ok(records) => {
                let count = records.len();
                self.state.columns = board::group_by_status(records);
                self.state.last_fetched = Some(Utc::now());
                self.state.last_error = None;
                self.state.is_loading = false;
                self.persist();
                tracing::debug!(projects = count, "Loaded project board from gateway");
                Ok(())
            }
            Err(e) if had_cache => {
                // Stale-while-revalidate: keep what we have.
                self.state.is_loading = false;
                tracing::warn!(error = %e, "Project fetch failed, keeping cached columns");
                Ok(())
            }
            Err(e) => {
                self.state.is_loading = false;
                self.state.last_error = Some(e.clone());
                tracing::error!(error = %e, "Project fetch failed with no cached columns");
                Err(e)
            }
        }
    }

    fn is_fresh(&self) -> bool {
        match self.state.last_fetched {
            Some(at) => Utc::now() - at < self.ttl,
            None => false,
        }
    }

    // -----------------------------------------------------------------------
    // Create
    // -----------------------------------------------------------------------

    /// Create a project and append it to `column`.
    ///
    /// Local state changes only after the gateway has assigned the
    /// authoritative id (the UI needs that id for subsequent drag
    /// operations). Title non-emptiness is the caller's contract; the
    /// store does not re-validate.
    pub async fn add_project(
        &mut self,
        column: ColumnKey,
        title: impl Into<String>,
        description: Option<String>,
    ) -> Result<ProjectRecord, BoardError> {
        self.state.is_loading = true;
        let input = CreateProject {
            title: title.into(),
            description,
        };

        match self.gateway.create(&input).await {
            Ok(record) => {
                board::append_to_column(&mut self.state.columns, column, record.clone());
                self.state.is_loading = false;
                self.state.last_error = None;
                self.persist();
                tracing::debug!(id = %record.id, column = column.as_str(), "Created project");
                Ok(record)
            }
            Err(e) => {
                self.state.is_loading = false;
                self.state.last_error = Some(e.clone());
                tracing::error!(error = %e, "Project creation failed");
                Err(e)
            }
        }
    }

    // -----------------------------------------------------------------------
    // Update (including cross-column moves)
    // -----------------------------------------------------------------------

    /// Persist `patch` remotely and apply the gateway's merged record
    /// locally.
    ///
    /// When the patch touches `status` the project moves to the end of
    /// its new column — or out of every column when archived. Not
    /// optimistic: a failure leaves `columns` exactly as it was.
    /// Afterwards the project appears in exactly one column, or none.
    pub async fn update_project(
        &mut self,
        id: &str,
        patch: UpdateProject,
    ) -> Result<ProjectRecord, BoardError> {
        self.state.is_loading = true;
        let status_changed = patch.status.is_some();

        match self.gateway.update(id, &patch).await {
            Ok(record) => {
                board::replace_in_place(&mut self.state.columns, &record);
                if status_changed {
                    board::remove_everywhere(&mut self.state.columns, &record.id);
                    if let Some(target) = record.status.column() {
                        board::append_to_column(&mut self.state.columns, target, record.clone());
                    }
                }
                self.state.is_loading = false;
                self.state.last_error = None;
                self.persist();
                tracing::debug!(id = %record.id, status = record.status.as_str(), "Updated project");
                Ok(record)
            }
            Err(e) => {
                self.state.is_loading = false;
                self.state.last_error = Some(e.clone());
                tracing::error!(id, error = %e, "Project update failed");
                Err(e)
            }
        }
    }

    // -----------------------------------------------------------------------
    // Archive / restore
    // -----------------------------------------------------------------------

    /// Soft delete: archive the project and drop it from every column.
    ///
    /// The record still exists remotely and can be restored.
    pub async fn delete_project(&mut self, id: &str) -> Result<(), BoardError> {
        self.update_project(id, UpdateProject::status(ProjectStatus::Archived))
            .await
            .map(|_| ())
    }

    /// Undo an archive: the project reappears at the end of the ideas
    /// column.
    pub async fn restore_project(&mut self, id: &str) -> Result<ProjectRecord, BoardError> {
        self.update_project(id, UpdateProject::status(ProjectStatus::Planning))
            .await
    }

    // -----------------------------------------------------------------------
    // Reorder (optimistic)
    // -----------------------------------------------------------------------

    /// Replace a column's order wholesale.
    ///
    /// Local-only and fire-and-forget: no gateway call, and no check
    /// that `new_order` is a permutation of the column — the
    /// drag-and-drop layer supplies the complete, correctly scoped
    /// list.
    pub fn reorder_projects_in_column(&mut self, column: ColumnKey, new_order: Vec<ProjectRecord>) {
        self.state.columns.insert(column, new_order);
        self.persist();
    }

    // -----------------------------------------------------------------------
    // Raw override
    // -----------------------------------------------------------------------

    /// Replace the whole mapping (test/demo seeding). Missing column
    /// keys are re-inserted empty.
    pub fn set_columns(&mut self, mut columns: Columns) {
        board::ensure_all_columns(&mut columns);
        self.state.columns = columns;
        self.persist();
    }

    // -----------------------------------------------------------------------
    // Snapshot
    // -----------------------------------------------------------------------

    /// Best-effort save of `{columns, last_fetched}`.
    fn persist(&self) {
        let snapshot = BoardSnapshot {
            columns: self.state.columns.clone(),
            last_fetched: self.state.last_fetched,
        };
        if let Err(e) = self.snapshots.save(&snapshot) {
            tracing::warn!(error = %e, "Failed to persist board snapshot");
        }
    }
}
