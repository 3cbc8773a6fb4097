// ============================================================================
// domain/error.rs - GENERATION DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they are stored inside reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("invalid count {count}: must be between 1 and {max}")]
    InvalidCount { count: usize, max: usize },

    #[error("invalid model field '{spec}': {reason}")]
    InvalidField { spec: String, reason: String },

    #[error("absolute paths not allowed here: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Catalogue / Queue Errors
    // ========================================================================
    #[error("duplicate target path in queue: {path}")]
    DuplicatePath { path: String },

    #[error("unknown template '{id}'")]
    UnknownTemplate { id: String },

    #[error("template '{template_id}' expects {expected} params, got {found}")]
    ParamsMismatch {
        template_id: String,
        expected: &'static str,
        found: &'static str,
    },

    // ========================================================================
    // Index Files
    // ========================================================================
    #[error("cannot parse index file at line {line}: {statement}")]
    IndexParse { line: usize, statement: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, reason } => vec![
                format!("'{}' was rejected: {}", name, reason),
                "Use letters, digits, '-', '_' or spaces, starting with a letter".into(),
                "Examples: billing, user-profile, OrderHistory".into(),
            ],
            Self::InvalidField { spec, reason } => vec![
                format!("Field '{}' was rejected: {}", spec, reason),
                "Fields are written as name:type, e.g. title:char or owner:fk=User".into(),
                "Supported types: char, text, int, bool, date, datetime, decimal, fk".into(),
            ],
            Self::InvalidCount { max, .. } => {
                vec![format!("Pass a count between 1 and {}", max)]
            }
            Self::DuplicatePath { path } => vec![
                format!("Two generated files would be written to {}", path),
                "This is a bug in the scaffold plan, please report it".into(),
            ],
            Self::UnknownTemplate { id } => vec![
                format!("No template is registered as '{}'", id),
                "Try: sygen list to see available templates".into(),
            ],
            Self::ParamsMismatch { template_id, .. } => vec![
                format!("Template '{}' was queued with the wrong parameters", template_id),
                "This is a bug in the scaffold plan, please report it".into(),
            ],
            Self::IndexParse { line, .. } => vec![
                format!("Check line {} of the index file", line),
                "Index files may only contain import/export statements and comments".into(),
                "Add the export manually or move unrelated code out of the barrel".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. }
            | Self::InvalidCount { .. }
            | Self::InvalidField { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Validation,
            Self::UnknownTemplate { .. } => ErrorCategory::NotFound,
            Self::IndexParse { .. } => ErrorCategory::Validation,
            Self::DuplicatePath { .. } | Self::ParamsMismatch { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
