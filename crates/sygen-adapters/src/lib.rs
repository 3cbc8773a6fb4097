//! Infrastructure adapters for Sygen.
//!
//! This crate implements the ports defined in `sygen-core::application::ports`.
//! It contains all I/O and the built-in template catalogue.

pub mod filesystem;
pub mod registry;
pub mod renderer;
pub mod templates;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use registry::{TemplateCatalogue, TemplateInfo};
pub use renderer::Placeholders;
