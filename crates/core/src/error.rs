use crate::types::ProjectId;

/// Closed set of failure kinds surfaced at the store boundary.
///
/// Callers branch on the kind, never on message text. Only
/// [`BoardError::Transient`] is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Network, transport, or remote-side failure.
    #[error("Transient failure: {0}")]
    Transient(String),

    /// The remote rejected the request as invalid.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No entity with the given id exists remotely.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: ProjectId },
}

impl BoardError {
    /// Shorthand for a project-scoped [`BoardError::NotFound`].
    pub fn project_not_found(id: impl Into<ProjectId>) -> Self {
        Self::NotFound {
            entity: "project",
            id: id.into(),
        }
    }

    /// Returns `true` for failures that may succeed on a retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_transient_is_retryable() {
        assert!(BoardError::Transient("timeout".into()).is_retryable());
        assert!(!BoardError::Validation("bad title".into()).is_retryable());
        assert!(!BoardError::project_not_found("p1").is_retryable());
    }

    #[test]
    fn not_found_names_entity_and_id() {
        let err = BoardError::project_not_found("abc-123");
        assert_eq!(err.to_string(), "Entity not found: project with id abc-123");
    }
}
