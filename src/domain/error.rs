// Dashboard error taxonomy
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// Input the store refuses to act on, e.g. an empty custom widget name.
    #[error("{field} must not be empty")]
    ValidationRejected { field: &'static str },

    /// A stale or unknown id. The store absorbs this as a no-op.
    #[error("{kind} `{id}` not found")]
    ReferenceNotFound { kind: &'static str, id: String },

    /// Raised while validating a seed, never by a transition.
    #[error("duplicate {scope} id `{id}`")]
    DuplicateId { scope: String, id: String },
}

impl DashboardError {
    pub fn category_not_found(id: &str) -> Self {
        DashboardError::ReferenceNotFound {
            kind: "category",
            id: id.to_string(),
        }
    }

    pub fn widget_not_found(id: &str) -> Self {
        DashboardError::ReferenceNotFound {
            kind: "widget",
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DashboardError::ReferenceNotFound { .. })
    }
}
