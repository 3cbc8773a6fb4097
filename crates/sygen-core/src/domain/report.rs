//! Template usage reporting.
//!
//! A [`TemplateUsageReport`] is derived entirely from one flush: one outcome
//! per task, in the order the tasks were enqueued.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{task::TaskKind, template::TemplateId};

/// A successfully written file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateUsage {
    pub kind: TaskKind,
    pub template_id: TemplateId,
    pub target_path: PathBuf,
}

/// A task that could not be rendered or written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskFailure {
    pub kind: TaskKind,
    pub template_id: TemplateId,
    pub target_path: PathBuf,
    /// Human-readable cause.
    pub cause: String,
    pub cause_kind: FailureCause,
}

/// Which step of a task failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureCause {
    UnknownTemplate,
    Render,
    FileSystem,
}

/// Outcome of one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TaskOutcome {
    Success(TemplateUsage),
    Failure(TaskFailure),
}

impl TaskOutcome {
    pub fn target_path(&self) -> &Path {
        match self {
            Self::Success(u) => &u.target_path,
            Self::Failure(f) => &f.target_path,
        }
    }

    pub fn kind(&self) -> TaskKind {
        match self {
            Self::Success(u) => u.kind,
            Self::Failure(f) => f.kind,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Ordered outcomes of one flush.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemplateUsageReport {
    entries: Vec<TaskOutcome>,
}

impl TemplateUsageReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: TaskOutcome) {
        self.entries.push(outcome);
    }

    /// All outcomes, in enqueue order.
    pub fn entries(&self) -> &[TaskOutcome] {
        &self.entries
    }

    pub fn successes(&self) -> impl Iterator<Item = &TemplateUsage> {
        self.entries.iter().filter_map(|e| match e {
            TaskOutcome::Success(u) => Some(u),
            TaskOutcome::Failure(_) => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = &TaskFailure> {
        self.entries.iter().filter_map(|e| match e {
            TaskOutcome::Failure(f) => Some(f),
            TaskOutcome::Success(_) => None,
        })
    }

    /// Paths written during the flush, in enqueue order. This is what the
    /// caller hands to the index updater.
    pub fn created_paths(&self) -> Vec<&Path> {
        self.successes().map(|u| u.target_path.as_path()).collect()
    }

    /// Whether `path` was written successfully.
    pub fn created(&self, path: &Path) -> bool {
        self.successes().any(|u| u.target_path == path)
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(path: &str, kind: TaskKind) -> TaskOutcome {
        TaskOutcome::Success(TemplateUsage {
            kind,
            template_id: TemplateId::new("component-basic"),
            target_path: PathBuf::from(path),
        })
    }

    #[test]
    fn report_keeps_order_and_splits_outcomes() {
        let mut report = TemplateUsageReport::new();
        report.push(usage("a.tsx", TaskKind::Component));
        report.push(TaskOutcome::Failure(TaskFailure {
            kind: TaskKind::Component,
            template_id: TemplateId::new("nope"),
            target_path: PathBuf::from("b.tsx"),
            cause: "unknown template 'nope'".into(),
            cause_kind: FailureCause::UnknownTemplate,
        }));
        report.push(usage("index.ts", TaskKind::Index));

        let paths: Vec<_> = report.entries().iter().map(|e| e.target_path()).collect();
        assert_eq!(
            paths,
            [Path::new("a.tsx"), Path::new("b.tsx"), Path::new("index.ts")]
        );
        assert_eq!(report.successes().count(), 2);
        assert!(report.has_failures());
        assert_eq!(
            report.created_paths(),
            [Path::new("a.tsx"), Path::new("index.ts")]
        );
        assert!(!report.created(Path::new("b.tsx")));
    }
}
