//! Generation Queue - collects file tasks and writes them in one pass.
//!
//! Tasks are validated when enqueued (duplicate targets, parameter shape)
//! and executed on [`GenerationQueue::flush`]. A flush never aborts early:
//! every task gets an outcome in the returned report, in enqueue order.

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRegistry},
    },
    domain::{
        DomainError, FailureCause, GenerationTask, TaskFailure, TaskOutcome, TemplateUsage,
        TemplateUsageReport,
    },
    error::{SygenError, SygenResult},
};

/// Ordered batch of pending file writes.
pub struct GenerationQueue<'r> {
    registry: &'r dyn TemplateRegistry,
    tasks: Vec<GenerationTask>,
    paths: HashSet<PathBuf>,
}

impl<'r> GenerationQueue<'r> {
    pub fn new(registry: &'r dyn TemplateRegistry) -> Self {
        Self {
            registry,
            tasks: Vec::new(),
            paths: HashSet::new(),
        }
    }

    /// Append a task.
    ///
    /// # Errors
    /// - `DuplicatePath` if a pending task already targets the same path
    /// - `ParamsMismatch` if the template is registered with another shape
    ///
    /// Ids the registry does not know are accepted here and reported as
    /// `UnknownTemplate` failures at flush time.
    pub fn enqueue(&mut self, task: GenerationTask) -> Result<(), DomainError> {
        if self.paths.contains(task.target_path()) {
            return Err(DomainError::DuplicatePath {
                path: task.target_path().display().to_string(),
            });
        }

        if let Some(shape) = self.registry.shape_of(task.template_id()) {
            task.params().check_shape(task.template_id(), shape)?;
        }

        debug!(
            path = %task.target_path().display(),
            template = %task.template_id(),
            "Task queued"
        );
        self.paths.insert(task.target_path().to_path_buf());
        self.tasks.push(task);
        Ok(())
    }

    /// Pending tasks, in enqueue order.
    pub fn tasks(&self) -> &[GenerationTask] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Render and write every pending task, then clear the queue.
    ///
    /// A failing task is recorded and the remaining tasks still run.
    #[instrument(skip_all, fields(tasks = self.tasks.len()))]
    pub fn flush(&mut self, fs: &dyn Filesystem) -> TemplateUsageReport {
        let tasks = std::mem::take(&mut self.tasks);
        self.paths.clear();

        let mut report = TemplateUsageReport::new();
        for task in tasks {
            let outcome = match self.run(&task, fs) {
                Ok(()) => {
                    debug!(path = %task.target_path().display(), "File written");
                    TaskOutcome::Success(TemplateUsage {
                        kind: task.kind(),
                        template_id: task.template_id().clone(),
                        target_path: task.target_path().to_path_buf(),
                    })
                }
                Err(e) => {
                    warn!(
                        path = %task.target_path().display(),
                        template = %task.template_id(),
                        error = %e,
                        "Task failed"
                    );
                    TaskOutcome::Failure(TaskFailure {
                        kind: task.kind(),
                        template_id: task.template_id().clone(),
                        target_path: task.target_path().to_path_buf(),
                        cause: e.to_string(),
                        cause_kind: failure_cause(&e),
                    })
                }
            };
            report.push(outcome);
        }

        info!(
            written = report.successes().count(),
            failed = report.failures().count(),
            "Queue flushed"
        );
        report
    }

    fn run(&self, task: &GenerationTask, fs: &dyn Filesystem) -> SygenResult<()> {
        let text = self.registry.render(task.template_id(), task.params())?;

        if let Some(parent) = task.target_path().parent() {
            if !parent.as_os_str().is_empty() {
                fs.create_dir_all(parent)?;
            }
        }

        fs.write_file(task.target_path(), &text)
    }
}

fn failure_cause(error: &SygenError) -> FailureCause {
    match error {
        SygenError::Domain(DomainError::UnknownTemplate { .. }) => FailureCause::UnknownTemplate,
        SygenError::Application(ApplicationError::FilesystemError { .. }) => {
            FailureCause::FileSystem
        }
        _ => FailureCause::Render,
    }
}
