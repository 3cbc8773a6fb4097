//! `sygen generate:*` - turn arguments into a validated request and run it.
//!
//! Names, counts and fields are validated here, before anything touches
//! the filesystem. An invalid value exits with code 2 and writes nothing.

use tracing::{info, instrument};

use sygen_adapters::{LocalFilesystem, TemplateCatalogue};
use sygen_core::{
    application::ScaffoldService,
    domain::{
        ComponentCount, ComponentOptions, ComponentVariant, ModelField, ScaffoldRequest,
        ValidatedName,
    },
};

use crate::{
    cli::{
        ComponentArgs, FeatureArgs, FeatureComponentsArgs, GenerateFlags, GlobalArgs, HookArgs,
        ModelArgs, StoreArgs, VariantArg,
    },
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

impl From<VariantArg> for ComponentVariant {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::Basic => ComponentVariant::Basic,
            VariantArg::Full => ComponentVariant::Full,
        }
    }
}

// ── request builders ──────────────────────────────────────────────────────────

pub fn component(args: &ComponentArgs, config: &AppConfig) -> CliResult<ScaffoldRequest> {
    let mut options: ComponentOptions = config.component_options();
    if let Some(variant) = args.variant {
        options.variant = variant.into();
    }
    if args.no_tests {
        options.with_tests = false;
    }
    if args.no_stories {
        options.with_stories = false;
    }

    Ok(ScaffoldRequest::Component {
        name: name("component name", &args.name)?,
        options,
    })
}

pub fn store(args: &StoreArgs) -> CliResult<ScaffoldRequest> {
    Ok(ScaffoldRequest::Store {
        name: name("store name", &args.name)?,
    })
}

pub fn hook(args: &HookArgs) -> CliResult<ScaffoldRequest> {
    let feature = args
        .feature
        .as_deref()
        .map(|f| name("feature name", f))
        .transpose()?;

    Ok(ScaffoldRequest::Hook {
        name: name("hook name", &args.name)?,
        feature,
    })
}

pub fn feature(args: &FeatureArgs) -> CliResult<ScaffoldRequest> {
    Ok(ScaffoldRequest::Feature {
        name: name("feature name", &args.name)?,
        component_count: count(args.count)?,
    })
}

pub fn feature_components(args: &FeatureComponentsArgs) -> CliResult<ScaffoldRequest> {
    Ok(ScaffoldRequest::FeatureComponents {
        feature: name("feature name", &args.feature)?,
        component_count: count(args.count)?,
    })
}

pub fn model(args: &ModelArgs) -> CliResult<ScaffoldRequest> {
    let fields = args
        .fields
        .iter()
        .map(|spec| {
            spec.parse::<ModelField>()
                .map_err(|e| CliError::invalid_input("field", e))
        })
        .collect::<CliResult<Vec<_>>>()?;

    Ok(ScaffoldRequest::Model {
        name: name("model name", &args.name)?,
        fields,
    })
}

fn name(what: &str, raw: &str) -> CliResult<ValidatedName> {
    ValidatedName::parse(raw).map_err(|e| CliError::invalid_input(what, e))
}

fn count(raw: usize) -> CliResult<ComponentCount> {
    ComponentCount::new(raw).map_err(|e| CliError::invalid_input("component count", e))
}

// ── execution ─────────────────────────────────────────────────────────────────

/// Run one request against the configured project.
///
/// Fatal core errors propagate as [`CliError::Core`]. Per-file failures are
/// printed in the summary and then reported as [`CliError::PartialFailure`].
#[instrument(skip_all, fields(request = request.label(), dry_run = flags.dry_run))]
pub fn execute(
    request: ScaffoldRequest,
    flags: &GenerateFlags,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let layout = config.layout(global.root.as_deref())?;
    info!(root = %layout.root().display(), "Resolved project layout");

    let service = ScaffoldService::new(
        Box::new(TemplateCatalogue::builtin()),
        Box::new(LocalFilesystem::new()),
        layout,
    );
    let title = format!("Generate {request}");

    if flags.dry_run {
        let plan = service
            .dry_run(&request)
            .with_cli_context(|| format!("planning {request}"))?;
        output.plan(&title, &plan)?;
        return Ok(());
    }

    let outcome = service
        .generate(&request)
        .with_cli_context(|| format!("generating {request}"))?;
    output.summary(&title, &outcome)?;

    let failed = outcome.report.failures().count();
    if failed > 0 {
        return Err(CliError::PartialFailure {
            failed,
            total: outcome.report.len(),
        });
    }
    Ok(())
}
