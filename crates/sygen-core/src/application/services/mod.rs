//! Application services - orchestrate use cases.
//!
//! The generation pipeline is split into small services that borrow the
//! ports they need, and [`ScaffoldService`] which owns the ports and wires
//! the others together for one request.

pub mod directory_ensurer;
pub mod generation_queue;
pub mod index_updater;
pub mod scaffold_service;

pub use directory_ensurer::DirectoryEnsurer;
pub use generation_queue::GenerationQueue;
pub use index_updater::{IndexUpdater, UpdateResult};
pub use scaffold_service::{
    IndexUpdateOutcome, PlannedExport, PlannedIndexUpdate, ScaffoldOutcome, ScaffoldPlan,
    ScaffoldService,
};
