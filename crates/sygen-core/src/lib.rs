//! Sygen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Sygen
//! React code generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            sygen-cli (CLI)              │
//! │   parses generate:* commands, prints    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  ScaffoldService ─► GenerationQueue     │
//! │   DirectoryEnsurer, IndexUpdater        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     Filesystem, TemplateRegistry        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    sygen-adapters (Infrastructure)      │
//! │ LocalFilesystem, MemoryFilesystem,      │
//! │ TemplateCatalogue                       │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ names, tasks, reports, barrel merging   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sygen_core::prelude::*;
//!
//! let service = ScaffoldService::new(registry, filesystem, ProjectLayout::new("."));
//! let request = ScaffoldRequest::FeatureComponents {
//!     feature: ValidatedName::parse("billing")?,
//!     component_count: ComponentCount::new(3)?,
//! };
//! let outcome = service.generate(&request)?;
//! for entry in outcome.report.entries() {
//!     println!("{} {}", entry.kind(), entry.target_path().display());
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationQueue, IndexUpdater, ScaffoldOutcome, ScaffoldService,
        ports::{Filesystem, TemplateRegistry},
    };
    pub use crate::domain::{
        ComponentCount, ComponentOptions, ComponentVariant, GenerationTask, IndexEntry, ModelField,
        ProjectLayout, ScaffoldRequest, TaskKind, TemplateId, TemplateParams, TemplateUsageReport,
        ValidatedName,
    };
    pub use crate::error::{SygenError, SygenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
