//! Atelier board domain.
//!
//! Pure building blocks for the project board's state store:
//!
//! - [`ProjectRecord`] and its create/update DTOs — the value type the
//!   board moves around.
//! - [`ProjectStatus`] / [`ColumnKey`] — lifecycle statuses and the
//!   total status→column mapping.
//! - [`board`] — the grouping function and column-shape helpers.
//! - [`ProjectGateway`] / [`SnapshotStore`] — the capability seams the
//!   store's collaborators are injected through.
//! - [`BoardError`] — the closed set of failure kinds.
//!
//! This crate contains no I/O; everything here operates on data the
//! caller already holds.

pub mod board;
pub mod error;
pub mod gateway;
pub mod models;
pub mod snapshot;
pub mod status;
pub mod types;

pub use board::{group_by_status, Columns};
pub use error::BoardError;
pub use gateway::ProjectGateway;
pub use models::{CreateProject, ProjectRecord, TaskItem, UpdateProject};
pub use snapshot::{BoardSnapshot, SnapshotStore};
pub use status::{ColumnKey, ProjectStatus, TaskStatus};
pub use types::{ProjectId, Timestamp};
