//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `sygen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ParamShape, TemplateId, TemplateParams};
use crate::error::SygenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `sygen_adapters::filesystem::LocalFilesystem` (production)
/// - `sygen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// All text is UTF-8.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> SygenResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> SygenResult<()>;

    /// Read a file. `Ok(None)` if it does not exist.
    fn read_file(&self, path: &Path) -> SygenResult<Option<String>>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Port for template lookup and rendering.
///
/// Implemented by:
/// - `sygen_adapters::registry::TemplateCatalogue` (built-in templates)
///
/// Implementations are read-only once built: no registration happens while a
/// generation run is in progress.
pub trait TemplateRegistry: Send + Sync {
    /// The parameter shape a template accepts, or `None` if unregistered.
    fn shape_of(&self, id: &TemplateId) -> Option<ParamShape>;

    /// Render a template. Deterministic: the same `(id, params)` always
    /// yields the same text.
    ///
    /// # Errors
    /// - `DomainError::UnknownTemplate` if `id` is not registered
    /// - `DomainError::ParamsMismatch` if `params` has the wrong shape
    fn render(&self, id: &TemplateId, params: &TemplateParams) -> SygenResult<String>;

    /// Every registered id, sorted.
    fn ids(&self) -> Vec<TemplateId>;
}
