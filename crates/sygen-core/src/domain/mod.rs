// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Sygen.
//!
//! Pure generation logic with no I/O. Filesystem access and template
//! rendering happen behind the ports in `crate::application::ports`.
//!
//! - **No async**: everything is synchronous
//! - **No I/O**: index merging is a pure text transform
//! - **Typed params**: each template declares the parameter shape it accepts
pub mod error;
pub mod index;
pub mod layout;
pub mod naming;
pub mod report;
pub mod request;
pub mod task;
pub mod template;

pub use error::{DomainError, ErrorCategory};
pub use index::{IndexEntry, IndexFile, IndexMerge, SkippedCollision};
pub use layout::ProjectLayout;
pub use naming::ValidatedName;
pub use report::{FailureCause, TaskFailure, TaskOutcome, TemplateUsage, TemplateUsageReport};
pub use request::{
    ComponentCount, ComponentOptions, ComponentVariant, MAX_COMPONENT_COUNT, ScaffoldRequest,
};
pub use task::{GenerationTask, TaskKind};
pub use template::{FieldType, ModelField, ParamShape, TemplateId, TemplateParams, ids};
