//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not generation
//! rules. Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A registered template failed to render its params.
    #[error("Template '{template_id}' failed to render: {reason}")]
    RenderingFailed { template_id: String, reason: String },

    /// Shared adapter state could not be accessed (lock poisoned, etc.).
    #[error("Adapter state unavailable: {name}")]
    AdapterUnavailable { name: &'static str },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check that the configured directories point inside the project".into(),
            ],
            Self::RenderingFailed { template_id, .. } => vec![
                format!("Template '{}' could not be rendered", template_id),
                "Please report this issue".into(),
            ],
            Self::AdapterUnavailable { name } => vec![
                format!("Internal component unavailable: {}", name),
                "Try again".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
            Self::AdapterUnavailable { .. } => ErrorCategory::Internal,
        }
    }

    /// Whether this is a filesystem failure.
    pub fn is_filesystem(&self) -> bool {
        matches!(self, Self::FilesystemError { .. })
    }
}
