//! Project record model and DTOs.
//!
//! Follows the entity / create DTO / all-`Option` update DTO split:
//! the gateway owns ids, default status, and timestamps; patches only
//! transmit the fields they set.

use serde::{Deserialize, Serialize};

use crate::status::{ProjectStatus, TaskStatus};
use crate::types::{ProjectId, Timestamp};

/// A project as returned by the remote gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    pub status: ProjectStatus,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Sub-tasks, owned exclusively by this project.
    #[serde(default)]
    pub tasks: Vec<TaskItem>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A sub-task owned by a single project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskItem {
    pub id: String,
    pub title: String,
    pub status: TaskStatus,
}

/// DTO for creating a new project.
///
/// The gateway assigns the id and timestamps and defaults the status
/// to [`ProjectStatus::Planning`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProject {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// DTO for updating an existing project. All fields are optional;
/// `None` fields are not transmitted and keep their remote value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<TaskItem>>,
}

impl UpdateProject {
    /// Patch that moves a project to `status` and touches nothing else.
    pub fn status(status: ProjectStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_patch_sets_only_status() {
        let patch = UpdateProject::status(ProjectStatus::Archived);
        let json = serde_json::to_value(&patch).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["status"], "archived");
    }

    #[test]
    fn empty_patch_serializes_to_empty_object() {
        let json = serde_json::to_value(UpdateProject::default()).unwrap();
        assert!(json.as_object().unwrap().is_empty());
    }

    #[test]
    fn record_deserializes_with_missing_optional_fields() {
        let record: ProjectRecord = serde_json::from_str(
            r#"{
                "id": "p1",
                "title": "Portfolio rewrite",
                "status": "planning",
                "created_at": "2026-01-05T10:00:00Z",
                "updated_at": "2026-01-05T10:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(record.id, "p1");
        assert_eq!(record.description, None);
        assert!(record.technologies.is_empty());
        assert!(record.tasks.is_empty());
    }

    #[test]
    fn record_round_trips_with_tasks() {
        let json = r#"{
            "id": "p2",
            "title": "Blog engine",
            "description": "markdown posts",
            "url": "https://example.com",
            "status": "in-progress",
            "technologies": ["rust", "postgres"],
            "tags": ["site"],
            "tasks": [{"id": "t1", "title": "schema", "status": "done"}],
            "created_at": "2026-01-05T10:00:00Z",
            "updated_at": "2026-02-01T09:30:00Z"
        }"#;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, ProjectStatus::InProgress);
        assert_eq!(record.tasks.len(), 1);
        assert_eq!(record.tasks[0].status, TaskStatus::Done);

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["tasks"][0]["status"], "done");
    }

    #[test]
    fn create_dto_skips_missing_description() {
        let input = CreateProject {
            title: "New".into(),
            description: None,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 1);
    }
}
