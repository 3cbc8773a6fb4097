//! Output management and formatting.

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use sygen_core::{
    application::{ScaffoldOutcome, ScaffoldPlan, UpdateResult},
    domain::{TaskKind, TaskOutcome, TemplateId},
};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // The flag wins, then `output.format`; Auto resolves to Human on a
        // TTY, Plain when piped.
        let requested = match args.output_format {
            OutputFormat::Auto => config.output.format,
            explicit => explicit,
        };
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format == OutputFormat::Plain,
            term: Term::stdout(),
        }
    }
    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Error indicator: `✗ <msg>`.  *Not* suppressed in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}") // ✗
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Pretty JSON on stdout. Printed even in quiet mode so pipelines keep
    /// working.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::from)?;
        self.term.write_line(&text)
    }

    // ── Reports ───────────────────────────────────────────────────────────

    /// Print the template usage summary of a finished run.
    pub fn summary(&self, title: &str, outcome: &ScaffoldOutcome) -> io::Result<()> {
        if self.resolved_format == OutputFormat::Json {
            return self.json(&SummaryDocument::new(title, outcome));
        }

        self.header(title)?;
        for entry in outcome.report.entries() {
            match entry {
                TaskOutcome::Success(usage) => self.success(&file_line(
                    usage.kind,
                    &usage.template_id,
                    &usage.target_path,
                ))?,
                TaskOutcome::Failure(failure) => self.error(&format!(
                    "{}: {}",
                    failure.target_path.display(),
                    failure.cause
                ))?,
            }
        }

        for update in &outcome.index_updates {
            match &update.result {
                Ok(result) => {
                    for line in index_lines(result) {
                        if line.skipped {
                            self.warning(&line.text)?;
                        } else {
                            self.info(&line.text)?;
                        }
                    }
                }
                Err(e) => self.warning(&format!(
                    "{} left unchanged: {e}",
                    update.index_path.display()
                ))?,
            }
        }

        self.print(&totals_line(outcome))
    }

    /// Print what a `--dry-run` would do.
    pub fn plan(&self, title: &str, plan: &ScaffoldPlan) -> io::Result<()> {
        if self.resolved_format == OutputFormat::Json {
            return self.json(&PlanDocument::new(title, plan));
        }

        self.header(&format!("{title} (dry run)"))?;
        for dir in &plan.directories {
            self.print(&format!("  dir        {}", dir.display()))?;
        }
        for task in &plan.tasks {
            self.print(&format!(
                "  {}",
                file_line(task.kind(), task.template_id(), task.target_path())
            ))?;
        }
        for update in &plan.index_updates {
            for export in &update.exports {
                self.print(&format!(
                    "  barrel     {} += {}",
                    update.index_path.display(),
                    export.entry.to_statement()
                ))?;
            }
        }
        self.info(&format!(
            "{} files would be generated; nothing was written",
            plan.tasks.len()
        ))
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── Line formatting ───────────────────────────────────────────────────────────

fn file_line(kind: TaskKind, template: &TemplateId, path: &Path) -> String {
    format!("{:<10} {:<26} {}", kind.as_str(), template.as_str(), path.display())
}

struct IndexLine {
    text: String,
    skipped: bool,
}

fn index_lines(result: &UpdateResult) -> Vec<IndexLine> {
    let path = result.index_path.display();
    let appended = result.appended.iter().map(|entry| IndexLine {
        text: format!("{path}: appended {}", entry.exported_name),
        skipped: false,
    });
    let skipped = result.collisions.iter().map(|c| IndexLine {
        text: format!(
            "{path}: skipped collision {} (already exported from '{}')",
            c.entry.exported_name, c.existing_source
        ),
        skipped: true,
    });
    appended.chain(skipped).collect()
}

fn totals_line(outcome: &ScaffoldOutcome) -> String {
    let written = outcome.report.successes().count();
    let failed = outcome.report.failures().count();
    let barrels = outcome
        .index_updates
        .iter()
        .filter(|u| matches!(&u.result, Ok(r) if r.changed()))
        .count();
    format!("{written} files generated, {failed} failed, {barrels} barrels updated")
}

// ── JSON documents ────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct SummaryDocument<'a> {
    request: &'a str,
    entries: &'a [TaskOutcome],
    index_updates: Vec<IndexDocument<'a>>,
    generated: usize,
    failed: usize,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum IndexDocument<'a> {
    Updated(&'a UpdateResult),
    Error { index_path: &'a Path, message: String },
}

impl<'a> SummaryDocument<'a> {
    fn new(request: &'a str, outcome: &'a ScaffoldOutcome) -> Self {
        Self {
            request,
            entries: outcome.report.entries(),
            index_updates: outcome
                .index_updates
                .iter()
                .map(|u| match &u.result {
                    Ok(result) => IndexDocument::Updated(result),
                    Err(e) => IndexDocument::Error {
                        index_path: &u.index_path,
                        message: e.to_string(),
                    },
                })
                .collect(),
            generated: outcome.report.successes().count(),
            failed: outcome.report.failures().count(),
        }
    }
}

#[derive(Serialize)]
struct PlanDocument<'a> {
    request: &'a str,
    dry_run: bool,
    directories: &'a [PathBuf],
    files: Vec<PlannedFile<'a>>,
    index_updates: &'a [sygen_core::application::PlannedIndexUpdate],
}

#[derive(Serialize)]
struct PlannedFile<'a> {
    kind: TaskKind,
    template_id: &'a TemplateId,
    target_path: &'a Path,
}

impl<'a> PlanDocument<'a> {
    fn new(request: &'a str, plan: &'a ScaffoldPlan) -> Self {
        Self {
            request,
            dry_run: true,
            directories: &plan.directories,
            files: plan
                .tasks
                .iter()
                .map(|t| PlannedFile {
                    kind: t.kind(),
                    template_id: t.template_id(),
                    target_path: t.target_path(),
                })
                .collect(),
            index_updates: &plan.index_updates,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use sygen_core::application::IndexUpdateOutcome;
    use sygen_core::domain::{
        DomainError, FailureCause, IndexEntry, SkippedCollision, TaskFailure, TemplateUsage,
        TemplateUsageReport,
    };

    use crate::config::AppConfig;

    fn make_manager(quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            root: None,
            output_format: OutputFormat::Human, // avoid TTY detection in tests
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    fn outcome() -> ScaffoldOutcome {
        let mut report = TemplateUsageReport::new();
        report.push(TaskOutcome::Success(TemplateUsage {
            kind: TaskKind::Store,
            template_id: TemplateId::new("app-store"),
            target_path: PathBuf::from("src/stores/cartStore.ts"),
        }));
        report.push(TaskOutcome::Failure(TaskFailure {
            kind: TaskKind::Hook,
            template_id: TemplateId::new("app-hook"),
            target_path: PathBuf::from("src/hooks/useCart.ts"),
            cause: "permission denied".into(),
            cause_kind: FailureCause::FileSystem,
        }));

        let updated = UpdateResult {
            index_path: PathBuf::from("src/stores/index.ts"),
            created: false,
            appended: vec![IndexEntry::named("useCartStore", "./cartStore")],
            collisions: vec![SkippedCollision {
                entry: IndexEntry::named("useUserStore", "./userStore"),
                existing_source: "./legacy".into(),
            }],
            exports: vec![],
        };

        ScaffoldOutcome {
            report,
            index_updates: vec![
                IndexUpdateOutcome {
                    index_path: PathBuf::from("src/stores/index.ts"),
                    result: Ok(updated),
                },
                IndexUpdateOutcome {
                    index_path: PathBuf::from("src/hooks/index.ts"),
                    result: Err(DomainError::IndexParse {
                        line: 1,
                        statement: "module.exports = {}".into(),
                    }
                    .into()),
                },
            ],
        }
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true);
        assert!(out.is_quiet());
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn no_color_flag_reported() {
        assert!(make_manager(false, false).supports_color());
        assert!(!make_manager(false, true).supports_color());
    }

    #[test]
    fn config_format_applies_when_flag_is_auto() {
        let mut config = AppConfig::default();
        config.output.format = OutputFormat::Json;
        let mut args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            root: None,
            output_format: OutputFormat::Auto,
        };
        assert_eq!(OutputManager::new(&args, &config).format(), OutputFormat::Json);

        args.output_format = OutputFormat::Plain;
        assert_eq!(OutputManager::new(&args, &config).format(), OutputFormat::Plain);
    }

    #[test]
    fn file_lines_are_aligned() {
        let line = file_line(
            TaskKind::Index,
            &TemplateId::new("index-suite"),
            Path::new("src/components/index.ts"),
        );
        assert_eq!(
            line,
            "index      index-suite                src/components/index.ts"
        );
    }

    #[test]
    fn index_lines_list_appended_then_skipped() {
        let outcome = outcome();
        let Ok(result) = &outcome.index_updates[0].result else {
            panic!("expected an update");
        };
        let lines = index_lines(result);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "src/stores/index.ts: appended useCartStore");
        assert!(!lines[0].skipped);
        assert!(lines[1].text.contains("skipped collision useUserStore"));
        assert!(lines[1].skipped);
    }

    #[test]
    fn totals_count_changed_barrels_only() {
        assert_eq!(
            totals_line(&outcome()),
            "1 files generated, 1 failed, 1 barrels updated"
        );
    }

    #[test]
    fn summary_document_shape() {
        let outcome = outcome();
        let value = serde_json::to_value(SummaryDocument::new("store 'Cart'", &outcome)).unwrap();

        assert_eq!(value["generated"], 1);
        assert_eq!(value["failed"], 1);
        assert_eq!(value["entries"][0]["status"], "success");
        assert_eq!(value["entries"][1]["cause_kind"], "file-system");
        assert_eq!(value["index_updates"][0]["status"], "updated");
        assert_eq!(value["index_updates"][1]["status"], "error");
    }

    #[test]
    fn summary_prints_without_error() {
        assert!(make_manager(false, true).summary("store", &outcome()).is_ok());
    }
}
