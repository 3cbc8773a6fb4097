//! Application layer for Sygen.
//!
//! This layer contains:
//! - **Services**: the generation pipeline (queue, directories, barrels)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! generation rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    DirectoryEnsurer, GenerationQueue, IndexUpdateOutcome, IndexUpdater, PlannedExport,
    PlannedIndexUpdate, ScaffoldOutcome, ScaffoldPlan, ScaffoldService, UpdateResult,
};

pub use ports::{Filesystem, TemplateRegistry};

pub use error::ApplicationError;
