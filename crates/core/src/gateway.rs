//! The remote project gateway seam.

use async_trait::async_trait;

use crate::error::BoardError;
use crate::models::{CreateProject, ProjectRecord, UpdateProject};

/// Remote persistence operations for project records.
///
/// Implementations may fail or be slow and make no transactional
/// guarantees visible to the client. There is no bulk/partial fetch,
/// no pagination, and no explicit delete — deletion is a status patch
/// to `archived`.
#[async_trait]
pub trait ProjectGateway: Send + Sync {
    /// Fetch every project, archived ones included.
    async fn fetch_all(&self) -> Result<Vec<ProjectRecord>, BoardError>;

    /// Create a project. The gateway assigns the id, the default
    /// status, and both timestamps.
    async fn create(&self, input: &CreateProject) -> Result<ProjectRecord, BoardError>;

    /// Merge `patch` into the project `id` remotely and return the
    /// full updated record. [`BoardError::NotFound`] if `id` is
    /// unknown.
    async fn update(&self, id: &str, patch: &UpdateProject) -> Result<ProjectRecord, BoardError>;
}
