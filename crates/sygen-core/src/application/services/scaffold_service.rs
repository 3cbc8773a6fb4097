//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates one generation run:
//! 1. Plan the files, directories and barrel exports for a request
//! 2. Ensure the directories exist (fatal on failure)
//! 3. Enqueue and flush the file tasks
//! 4. Update barrels with the modules the flush actually created
//!
//! Planning is pure and exposed on its own for `--dry-run`.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ports::{Filesystem, TemplateRegistry},
        services::{
            DirectoryEnsurer, GenerationQueue,
            index_updater::{IndexUpdater, UpdateResult},
        },
    },
    domain::{
        ComponentCount, ComponentOptions, ComponentVariant, GenerationTask, IndexEntry, ModelField,
        ProjectLayout, ScaffoldRequest, TaskKind, TemplateParams, TemplateUsageReport,
        ValidatedName, ids, naming,
    },
    error::SygenResult,
};

/// One export a barrel should gain, conditional on its module being written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedExport {
    /// The generated file that must exist before the export is added.
    pub module_path: PathBuf,
    pub entry: IndexEntry,
}

/// A barrel file to update after the flush.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedIndexUpdate {
    pub index_path: PathBuf,
    pub exports: Vec<PlannedExport>,
}

/// Everything a request will touch, computed without I/O.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScaffoldPlan {
    pub directories: Vec<PathBuf>,
    pub tasks: Vec<GenerationTask>,
    pub index_updates: Vec<PlannedIndexUpdate>,
}

/// Result of one barrel update.
#[derive(Debug, Clone)]
pub struct IndexUpdateOutcome {
    pub index_path: PathBuf,
    pub result: SygenResult<UpdateResult>,
}

/// What a generation run produced.
#[derive(Debug, Clone)]
pub struct ScaffoldOutcome {
    pub report: TemplateUsageReport,
    pub index_updates: Vec<IndexUpdateOutcome>,
}

impl ScaffoldOutcome {
    /// Whether any file task failed. Barrel problems are not counted.
    pub fn has_failures(&self) -> bool {
        self.report.has_failures()
    }

    pub fn index_errors(&self) -> impl Iterator<Item = (&Path, &crate::error::SygenError)> {
        self.index_updates.iter().filter_map(|u| match &u.result {
            Err(e) => Some((u.index_path.as_path(), e)),
            Ok(_) => None,
        })
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    registry: Box<dyn TemplateRegistry>,
    filesystem: Box<dyn Filesystem>,
    layout: ProjectLayout,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use sygen_core::{application::ScaffoldService, domain::ProjectLayout};
    ///
    /// let service = ScaffoldService::new(
    ///     registry,   // impl TemplateRegistry
    ///     filesystem, // impl Filesystem
    ///     ProjectLayout::new("."),
    /// );
    /// ```
    pub fn new(
        registry: Box<dyn TemplateRegistry>,
        filesystem: Box<dyn Filesystem>,
        layout: ProjectLayout,
    ) -> Self {
        Self {
            registry,
            filesystem,
            layout,
        }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    pub fn registry(&self) -> &dyn TemplateRegistry {
        self.registry.as_ref()
    }

    /// Run a request end to end.
    ///
    /// Returns `Err` only for fatal problems (a directory could not be
    /// created, a task was rejected at enqueue). Per-file failures are in
    /// the outcome's report, barrel failures in its index updates.
    #[instrument(skip_all, fields(request = %request))]
    pub fn generate(&self, request: &ScaffoldRequest) -> SygenResult<ScaffoldOutcome> {
        info!("Generating {}", request);
        let plan = self.plan(request);

        let mut ensurer = DirectoryEnsurer::new(self.filesystem.as_ref());
        for dir in &plan.directories {
            ensurer.ensure_dir(dir)?;
        }

        let mut queue = GenerationQueue::new(self.registry.as_ref());
        for task in plan.tasks {
            queue.enqueue(task)?;
        }
        let report = queue.flush(self.filesystem.as_ref());

        let index_updates = self.update_indexes(&plan.index_updates, &report);

        info!(
            files = report.successes().count(),
            failed = report.failures().count(),
            indexes = index_updates.len(),
            "Generation finished"
        );
        Ok(ScaffoldOutcome {
            report,
            index_updates,
        })
    }

    /// Plan a request and check it against the registry without writing.
    pub fn dry_run(&self, request: &ScaffoldRequest) -> SygenResult<ScaffoldPlan> {
        let plan = self.plan(request);

        let mut queue = GenerationQueue::new(self.registry.as_ref());
        for task in &plan.tasks {
            queue.enqueue(task.clone())?;
        }

        Ok(plan)
    }

    /// Compute the directories, tasks and barrel exports for a request.
    pub fn plan(&self, request: &ScaffoldRequest) -> ScaffoldPlan {
        let layout = &self.layout;
        let mut plan = PlanBuilder::default();

        match request {
            ScaffoldRequest::Component { name, options } => {
                plan_component(&mut plan, layout, name, options)
            }
            ScaffoldRequest::Store { name } => plan_store(&mut plan, layout, name),
            ScaffoldRequest::Hook { name, feature } => {
                plan_hook(&mut plan, layout, name, feature.as_ref())
            }
            ScaffoldRequest::Feature {
                name,
                component_count,
            } => plan_feature(&mut plan, layout, name, *component_count),
            ScaffoldRequest::FeatureComponents {
                feature,
                component_count,
            } => {
                let base = layout.feature(feature.kebab());
                plan.dir(&base);
                plan_feature_components(&mut plan, &base, feature, *component_count);
            }
            ScaffoldRequest::Model { name, fields } => plan_model(&mut plan, layout, name, fields),
            ScaffoldRequest::Init => plan_init(&mut plan, layout),
        }

        debug!(
            dirs = plan.inner.directories.len(),
            tasks = plan.inner.tasks.len(),
            "Plan built"
        );
        plan.inner
    }

    fn update_indexes(
        &self,
        updates: &[PlannedIndexUpdate],
        report: &TemplateUsageReport,
    ) -> Vec<IndexUpdateOutcome> {
        let updater = IndexUpdater::new(self.filesystem.as_ref());
        let mut outcomes = Vec::new();

        for planned in updates {
            let entries: Vec<IndexEntry> = planned
                .exports
                .iter()
                .filter(|e| report.created(&e.module_path))
                .map(|e| e.entry.clone())
                .collect();

            if entries.is_empty() {
                debug!(index = %planned.index_path.display(), "No created modules, skipping");
                continue;
            }

            let result = updater.update_index(&planned.index_path, &entries);
            if let Err(e) = &result {
                warn!(index = %planned.index_path.display(), error = %e, "Index not updated");
            }
            outcomes.push(IndexUpdateOutcome {
                index_path: planned.index_path.clone(),
                result,
            });
        }

        outcomes
    }
}

// -------------------------------------------------------------------------
// Planning
// -------------------------------------------------------------------------

#[derive(Default)]
struct PlanBuilder {
    inner: ScaffoldPlan,
}

impl PlanBuilder {
    fn dir(&mut self, path: &Path) {
        if !self.inner.directories.iter().any(|d| d == path) {
            self.inner.directories.push(path.to_path_buf());
        }
    }

    fn task(&mut self, path: PathBuf, template: &str, params: TemplateParams, kind: TaskKind) {
        self.inner
            .tasks
            .push(GenerationTask::new(path, template, params, kind));
    }

    /// Plan a barrel update; each export is `(module file, name, is_default)`.
    fn index(&mut self, index_path: PathBuf, exports: Vec<(PathBuf, String, bool)>) {
        let dir = index_path.parent().unwrap_or(Path::new("")).to_path_buf();
        let exports = exports
            .into_iter()
            .map(|(module_path, name, is_default)| {
                let source = specifier(&dir, &module_path);
                let entry = if is_default {
                    IndexEntry::default_export(name, source)
                } else {
                    IndexEntry::named(name, source)
                };
                PlannedExport { module_path, entry }
            })
            .collect();

        self.inner.index_updates.push(PlannedIndexUpdate {
            index_path,
            exports,
        });
    }
}

fn specifier(index_dir: &Path, module: &Path) -> String {
    naming::module_specifier(index_dir, module).unwrap_or_else(|| {
        let stem = module.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        format!("./{stem}")
    })
}

/// `useCart` and `cart` both name the hook `useCart`.
fn hook_base(name: &ValidatedName) -> ValidatedName {
    match name.camel().strip_prefix("use") {
        Some(rest) if rest.starts_with(|c: char| c.is_ascii_uppercase()) => {
            ValidatedName::parse(rest).unwrap_or_else(|_| name.clone())
        }
        _ => name.clone(),
    }
}

fn plan_component(
    plan: &mut PlanBuilder,
    layout: &ProjectLayout,
    name: &ValidatedName,
    options: &ComponentOptions,
) {
    let pascal = name.pascal();
    let dir = layout.components().join(pascal);
    let params = || TemplateParams::named(name);
    plan.dir(&dir);

    let template = match options.variant {
        ComponentVariant::Basic => ids::COMPONENT_BASIC,
        ComponentVariant::Full => ids::COMPONENT_FULL,
    };
    plan.task(
        dir.join(format!("{pascal}.tsx")),
        template,
        params(),
        TaskKind::Component,
    );
    if options.with_tests {
        plan.task(
            dir.join(format!("{pascal}.test.tsx")),
            ids::COMPONENT_TEST,
            params(),
            TaskKind::Test,
        );
    }
    if options.with_stories {
        plan.task(
            dir.join(format!("{pascal}.stories.tsx")),
            ids::COMPONENT_STORYBOOK,
            params(),
            TaskKind::Story,
        );
    }

    let component_index = dir.join("index.ts");
    plan.task(
        component_index.clone(),
        ids::INDEX_BASIC,
        params(),
        TaskKind::Index,
    );
    plan.index(
        layout.components().join("index.ts"),
        vec![(component_index, pascal.to_string(), false)],
    );
}

fn plan_store(plan: &mut PlanBuilder, layout: &ProjectLayout, name: &ValidatedName) {
    let dir = layout.stores();
    let file = dir.join(format!("{}Store.ts", name.camel()));
    plan.dir(&dir);

    plan.task(
        file.clone(),
        ids::APP_STORE,
        TemplateParams::named(name),
        TaskKind::Store,
    );
    plan.index(
        dir.join("index.ts"),
        vec![(file, format!("use{}Store", name.pascal()), false)],
    );
}

fn plan_hook(
    plan: &mut PlanBuilder,
    layout: &ProjectLayout,
    name: &ValidatedName,
    feature: Option<&ValidatedName>,
) {
    let base = hook_base(name);
    let hook_name = format!("use{}", base.pascal());

    let (dir, template) = match feature {
        Some(f) => (layout.feature(f.kebab()).join("hooks"), ids::FEATURE_HOOK),
        None => (layout.hooks(), ids::APP_HOOK),
    };
    let file = dir.join(format!("{hook_name}.ts"));
    plan.dir(&dir);

    plan.task(
        file.clone(),
        template,
        TemplateParams::named(&base),
        TaskKind::Hook,
    );
    plan.index(dir.join("index.ts"), vec![(file, hook_name, false)]);
}

fn plan_feature_components(
    plan: &mut PlanBuilder,
    feature_dir: &Path,
    feature: &ValidatedName,
    count: ComponentCount,
) {
    let dir = feature_dir.join("components");
    plan.dir(&dir);

    let mut entries = Vec::with_capacity(count.get());
    for i in 1..=count.get() {
        let component = feature.suffixed(&format!("component{i}"));
        plan.task(
            dir.join(format!("{}.tsx", component.pascal())),
            ids::COMPONENT_BASIC,
            TemplateParams::named(&component),
            TaskKind::Component,
        );
        entries.push(IndexEntry::named(
            component.pascal(),
            format!("./{}", component.pascal()),
        ));
    }

    plan.task(
        dir.join("index.ts"),
        ids::INDEX_SUITE,
        TemplateParams::Index { entries },
        TaskKind::Index,
    );
}

fn plan_feature(
    plan: &mut PlanBuilder,
    layout: &ProjectLayout,
    name: &ValidatedName,
    count: ComponentCount,
) {
    let pascal = name.pascal();
    let base = layout.feature(name.kebab());
    let params = || TemplateParams::named(name);

    plan.dir(&base);
    plan_feature_components(plan, &base, name, count);

    let hooks = base.join("hooks");
    plan.dir(&hooks);
    plan.task(
        hooks.join(format!("use{pascal}.ts")),
        ids::FEATURE_HOOK,
        params(),
        TaskKind::Hook,
    );
    plan.task(
        hooks.join("index.ts"),
        ids::INDEX_HOOK_INDIVIDUAL,
        params(),
        TaskKind::Index,
    );

    let routes = base.join("routes");
    let routes_name = format!("{pascal}Routes");
    plan.dir(&routes);
    plan.task(
        routes.join(format!("{routes_name}.tsx")),
        ids::FEATURE_ROUTES_INDIVIDUAL,
        params(),
        TaskKind::Route,
    );
    let routes_index = routes.join("index.ts");
    plan.task(
        routes_index.clone(),
        ids::FEATURE_ROUTES_SUITE,
        TemplateParams::Index {
            entries: vec![IndexEntry::named(&routes_name, format!("./{routes_name}"))],
        },
        TaskKind::Index,
    );

    let pages = base.join("pages");
    let page_name = format!("{pascal}Page");
    let page = pages.join(format!("{page_name}.tsx"));
    plan.dir(&pages);
    plan.task(page.clone(), ids::FEATURE_PAGE, params(), TaskKind::Page);

    let types = base.join("types");
    plan.dir(&types);
    plan.task(
        types.join("index.ts"),
        ids::INDEX_TYPES,
        params(),
        TaskKind::Types,
    );

    plan.index(
        base.join("index.ts"),
        vec![(page, page_name, false), (routes_index, routes_name, false)],
    );
}

fn plan_model(
    plan: &mut PlanBuilder,
    layout: &ProjectLayout,
    name: &ValidatedName,
    fields: &[ModelField],
) {
    let dir = layout.api().join(naming::pluralize(name.snake()));
    let params = || TemplateParams::Model {
        name: name.clone(),
        fields: fields.to_vec(),
    };
    plan.dir(&dir);

    for (file, template, kind) in [
        ("models.py", ids::MODEL_DJANGO, TaskKind::Model),
        ("serializers.py", ids::MODEL_SERIALIZERS, TaskKind::Serializer),
        ("urls.py", ids::MODEL_URLS, TaskKind::Urls),
        ("views.py", ids::MODEL_VIEWS, TaskKind::Views),
    ] {
        plan.task(dir.join(file), template, params(), kind);
    }
}

fn plan_init(plan: &mut PlanBuilder, layout: &ProjectLayout) {
    let utils = layout.src().join("utils");
    let routes = layout.src().join("routes");
    let scroll = utils.join("ScrollToTop.tsx");
    plan.dir(&utils);
    plan.dir(&routes);

    plan.task(
        scroll.clone(),
        ids::UTILS_SCROLL_TO_TOP,
        TemplateParams::Static,
        TaskKind::Util,
    );
    plan.task(
        routes.join("public.tsx"),
        ids::ROUTES_PUBLIC,
        TemplateParams::Static,
        TaskKind::Route,
    );

    plan.index(
        utils.join("index.ts"),
        vec![
            (scroll.clone(), "ScrollToTop".to_string(), true),
            (scroll, "scrollToTop".to_string(), false),
        ],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::{ParamShape, TemplateId};

    /// Registry that knows nothing; planning never consults it.
    struct NoTemplates;

    impl TemplateRegistry for NoTemplates {
        fn shape_of(&self, _: &TemplateId) -> Option<ParamShape> {
            None
        }

        fn render(&self, id: &TemplateId, _: &TemplateParams) -> SygenResult<String> {
            Err(crate::domain::DomainError::UnknownTemplate { id: id.to_string() }.into())
        }

        fn ids(&self) -> Vec<TemplateId> {
            Vec::new()
        }
    }

    fn service() -> ScaffoldService {
        ScaffoldService::new(
            Box::new(NoTemplates),
            Box::new(MockFilesystem::new()),
            ProjectLayout::new("app"),
        )
    }

    fn name(s: &str) -> ValidatedName {
        ValidatedName::parse(s).unwrap()
    }

    fn paths(plan: &ScaffoldPlan) -> Vec<String> {
        plan.tasks
            .iter()
            .map(|t| t.target_path().display().to_string())
            .collect()
    }

    #[test]
    fn component_plan_includes_companions() {
        let plan = service().plan(&ScaffoldRequest::Component {
            name: name("user card"),
            options: ComponentOptions::default(),
        });

        assert_eq!(
            paths(&plan),
            [
                "app/src/components/UserCard/UserCard.tsx",
                "app/src/components/UserCard/UserCard.test.tsx",
                "app/src/components/UserCard/UserCard.stories.tsx",
                "app/src/components/UserCard/index.ts",
            ]
        );

        let update = &plan.index_updates[0];
        assert_eq!(update.index_path, Path::new("app/src/components/index.ts"));
        assert_eq!(
            update.exports[0].entry,
            IndexEntry::named("UserCard", "./UserCard")
        );
    }

    #[test]
    fn component_plan_respects_options() {
        let plan = service().plan(&ScaffoldRequest::Component {
            name: name("button"),
            options: ComponentOptions {
                variant: ComponentVariant::Full,
                with_tests: false,
                with_stories: false,
            },
        });

        assert_eq!(plan.tasks.len(), 2);
        assert_eq!(plan.tasks[0].template_id().as_str(), ids::COMPONENT_FULL);
    }

    #[test]
    fn feature_components_plan() {
        let plan = service().plan(&ScaffoldRequest::FeatureComponents {
            feature: name("billing"),
            component_count: ComponentCount::new(3).unwrap(),
        });

        assert_eq!(
            paths(&plan),
            [
                "app/src/features/billing/components/BillingComponent1.tsx",
                "app/src/features/billing/components/BillingComponent2.tsx",
                "app/src/features/billing/components/BillingComponent3.tsx",
                "app/src/features/billing/components/index.ts",
            ]
        );
        assert!(plan.index_updates.is_empty());

        let TemplateParams::Index { entries } = plan.tasks[3].params() else {
            panic!("index task should carry entries");
        };
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2].source_module_path, "./BillingComponent3");
    }

    #[test]
    fn feature_plan_updates_feature_barrel() {
        let plan = service().plan(&ScaffoldRequest::Feature {
            name: name("order-history"),
            component_count: ComponentCount::new(1).unwrap(),
        });

        assert_eq!(plan.tasks.len(), 8);
        assert!(
            plan.directories
                .contains(&PathBuf::from("app/src/features/order-history/types"))
        );

        let update = &plan.index_updates[0];
        assert_eq!(
            update.index_path,
            Path::new("app/src/features/order-history/index.ts")
        );
        let sources: Vec<_> = update
            .exports
            .iter()
            .map(|e| e.entry.source_module_path.as_str())
            .collect();
        assert_eq!(sources, ["./pages/OrderHistoryPage", "./routes"]);
    }

    #[test]
    fn hook_names_are_not_doubled() {
        let plan = service().plan(&ScaffoldRequest::Hook {
            name: name("useCart"),
            feature: Some(name("checkout")),
        });

        assert_eq!(
            paths(&plan),
            ["app/src/features/checkout/hooks/useCart.ts"]
        );
        assert_eq!(
            plan.index_updates[0].exports[0].entry,
            IndexEntry::named("useCart", "./useCart")
        );
    }

    #[test]
    fn store_and_model_paths() {
        let svc = service();

        let store = svc.plan(&ScaffoldRequest::Store {
            name: name("shopping cart"),
        });
        assert_eq!(paths(&store), ["app/src/stores/shoppingCartStore.ts"]);
        assert_eq!(
            store.index_updates[0].exports[0].entry.exported_name,
            "useShoppingCartStore"
        );

        let model = svc.plan(&ScaffoldRequest::Model {
            name: name("Category"),
            fields: Vec::new(),
        });
        assert_eq!(model.tasks.len(), 4);
        assert!(paths(&model)[0].starts_with("app/api/categories/"));
    }

    #[test]
    fn init_plan_exports_default_and_named() {
        let plan = service().plan(&ScaffoldRequest::Init);

        let entries: Vec<_> = plan.index_updates[0]
            .exports
            .iter()
            .map(|e| e.entry.to_statement())
            .collect();
        assert_eq!(
            entries,
            [
                "export { default as ScrollToTop } from './ScrollToTop';",
                "export { scrollToTop } from './ScrollToTop';",
            ]
        );
    }

    #[test]
    fn directory_failure_is_fatal() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(false);
        fs.expect_create_dir_all().returning(|path| {
            Err(crate::application::ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "read-only".into(),
            }
            .into())
        });
        fs.expect_write_file().never();

        let svc = ScaffoldService::new(Box::new(NoTemplates), Box::new(fs), ProjectLayout::default());
        let result = svc.generate(&ScaffoldRequest::Store { name: name("cart") });

        assert!(result.is_err());
    }
}
