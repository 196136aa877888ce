//! Status enums for projects, tasks, and board columns.
//!
//! Wire forms are kebab-case strings matching the hosted database's
//! check constraints. The status→column mapping that drives the board
//! layout lives on [`ProjectStatus::column`]; it is total — every
//! status maps to exactly one column or, for `archived`, to none.

use serde::{Deserialize, Serialize};

use crate::error::BoardError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Project status wire strings.
pub const STATUS_PLANNING: &str = "planning";
pub const STATUS_IN_PROGRESS: &str = "in-progress";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_ON_HOLD: &str = "on-hold";
pub const STATUS_ARCHIVED: &str = "archived";

/// All valid project status strings.
pub const VALID_PROJECT_STATUSES: &[&str] = &[
    STATUS_PLANNING,
    STATUS_IN_PROGRESS,
    STATUS_COMPLETED,
    STATUS_ON_HOLD,
    STATUS_ARCHIVED,
];

/// Column key wire strings.
pub const COLUMN_IDEAS: &str = "ideas";
pub const COLUMN_IN_PROGRESS: &str = "in-progress";
pub const COLUMN_COMPLETED: &str = "completed";

/// All valid column key strings, in display order.
pub const VALID_COLUMN_KEYS: &[&str] = &[COLUMN_IDEAS, COLUMN_IN_PROGRESS, COLUMN_COMPLETED];

// ---------------------------------------------------------------------------
// ProjectStatus
// ---------------------------------------------------------------------------

/// Project lifecycle status. `Archived` means logically deleted and
/// excluded from every board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Planning,
    InProgress,
    Completed,
    OnHold,
    Archived,
}

impl ProjectStatus {
    /// Convert from a wire string value.
    pub fn from_str_value(s: &str) -> Result<Self, BoardError> {
        match s {
            STATUS_PLANNING => Ok(Self::Planning),
            STATUS_IN_PROGRESS => Ok(Self::InProgress),
            STATUS_COMPLETED => Ok(Self::Completed),
            STATUS_ON_HOLD => Ok(Self::OnHold),
            STATUS_ARCHIVED => Ok(Self::Archived),
            _ => Err(BoardError::Validation(format!(
                "Invalid project status '{s}'. Must be one of: {}",
                VALID_PROJECT_STATUSES.join(", ")
            ))),
        }
    }

    /// Convert to the wire string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planning => STATUS_PLANNING,
            Self::InProgress => STATUS_IN_PROGRESS,
            Self::Completed => STATUS_COMPLETED,
            Self::OnHold => STATUS_ON_HOLD,
            Self::Archived => STATUS_ARCHIVED,
        }
    }

    /// The board column holding projects of this status, or `None` for
    /// `Archived` (excluded from the board entirely).
    pub fn column(self) -> Option<ColumnKey> {
        match self {
            Self::Planning | Self::OnHold => Some(ColumnKey::Ideas),
            Self::InProgress => Some(ColumnKey::InProgress),
            Self::Completed => Some(ColumnKey::Completed),
            Self::Archived => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ColumnKey
// ---------------------------------------------------------------------------

/// Board column identifier. Variant declaration order is display order,
/// which `Ord` (and therefore `BTreeMap` iteration) follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnKey {
    Ideas,
    InProgress,
    Completed,
}

impl ColumnKey {
    /// All columns, in display order.
    pub const ALL: [ColumnKey; 3] = [Self::Ideas, Self::InProgress, Self::Completed];

    /// Convert from a wire string value.
    pub fn from_str_value(s: &str) -> Result<Self, BoardError> {
        match s {
            COLUMN_IDEAS => Ok(Self::Ideas),
            COLUMN_IN_PROGRESS => Ok(Self::InProgress),
            COLUMN_COMPLETED => Ok(Self::Completed),
            _ => Err(BoardError::Validation(format!(
                "Invalid column '{s}'. Must be one of: {}",
                VALID_COLUMN_KEYS.join(", ")
            ))),
        }
    }

    /// Convert to the wire string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ideas => COLUMN_IDEAS,
            Self::InProgress => COLUMN_IN_PROGRESS,
            Self::Completed => COLUMN_COMPLETED,
        }
    }
}

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Status of a sub-task owned by a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Convert to the wire string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- ProjectStatus --------------------------------------------------------

    #[test]
    fn project_status_round_trip() {
        for s in VALID_PROJECT_STATUSES {
            let status = ProjectStatus::from_str_value(s).unwrap();
            assert_eq!(status.as_str(), *s);
        }
    }

    #[test]
    fn project_status_invalid_rejected() {
        let result = ProjectStatus::from_str_value("done");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid project status"));
    }

    #[test]
    fn project_status_serde_wire_form() {
        let json = serde_json::to_string(&ProjectStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");

        let status: ProjectStatus = serde_json::from_str("\"on-hold\"").unwrap();
        assert_eq!(status, ProjectStatus::OnHold);
    }

    // -- Column mapping -------------------------------------------------------

    #[test]
    fn status_column_mapping_is_total() {
        assert_eq!(ProjectStatus::Planning.column(), Some(ColumnKey::Ideas));
        assert_eq!(ProjectStatus::OnHold.column(), Some(ColumnKey::Ideas));
        assert_eq!(ProjectStatus::InProgress.column(), Some(ColumnKey::InProgress));
        assert_eq!(ProjectStatus::Completed.column(), Some(ColumnKey::Completed));
        assert_eq!(ProjectStatus::Archived.column(), None);
    }

    // -- ColumnKey ------------------------------------------------------------

    #[test]
    fn column_key_round_trip() {
        for s in VALID_COLUMN_KEYS {
            let key = ColumnKey::from_str_value(s).unwrap();
            assert_eq!(key.as_str(), *s);
        }
    }

    #[test]
    fn column_key_invalid_rejected() {
        assert!(ColumnKey::from_str_value("backlog").is_err());
        assert!(ColumnKey::from_str_value("").is_err());
    }

    #[test]
    fn column_keys_ordered_for_display() {
        assert!(ColumnKey::Ideas < ColumnKey::InProgress);
        assert!(ColumnKey::InProgress < ColumnKey::Completed);
        assert_eq!(ColumnKey::ALL.len(), VALID_COLUMN_KEYS.len());
    }

    #[test]
    fn column_key_as_map_key_serializes_to_string() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(ColumnKey::InProgress, 1);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, "{\"in-progress\":1}");

        let back: std::collections::BTreeMap<ColumnKey, i32> =
            serde_json::from_str(&json).unwrap();
        assert_eq!(back.get(&ColumnKey::InProgress), Some(&1));
    }

    // -- TaskStatus -----------------------------------------------------------

    #[test]
    fn task_status_serde_wire_form() {
        let json = serde_json::to_string(&TaskStatus::Todo).unwrap();
        assert_eq!(json, "\"todo\"");
        let status: TaskStatus = serde_json::from_str("\"done\"").unwrap();
        assert_eq!(status, TaskStatus::Done);
    }
}
