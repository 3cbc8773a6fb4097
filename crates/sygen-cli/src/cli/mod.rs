//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "sygen",
    bin_name = "sygen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} React feature scaffolding",
    long_about = "Sygen generates React components, hooks, stores, feature \
                  folders and Django REST models from built-in templates, \
                  and keeps the index.ts barrels up to date.",
    after_help = "EXAMPLES:\n\
        \x20 sygen generate:component button --variant full\n\
        \x20 sygen generate:feature billing 3\n\
        \x20 sygen generate:feature-components billing 2\n\
        \x20 sygen generate:model invoice --field number:char --field total:decimal\n\
        \x20 sygen list --format json",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a shared component with its test, story and barrel.
    #[command(
        name = "generate:component",
        about = "Generate a shared component",
        after_help = "EXAMPLES:\n\
            \x20 sygen generate:component button\n\
            \x20 sygen generate:component \"user card\" --variant full --no-stories"
    )]
    Component(ComponentArgs),

    /// Generate a Zustand store.
    #[command(name = "generate:store", about = "Generate a store")]
    Store(StoreArgs),

    /// Generate an app-level or feature hook.
    #[command(
        name = "generate:hook",
        about = "Generate a hook",
        after_help = "EXAMPLES:\n\
            \x20 sygen generate:hook cart\n\
            \x20 sygen generate:hook useInvoices --feature billing"
    )]
    Hook(HookArgs),

    /// Generate a complete feature folder.
    #[command(
        name = "generate:feature",
        about = "Generate a feature folder",
        after_help = "EXAMPLES:\n\
            \x20 sygen generate:feature billing\n\
            \x20 sygen generate:feature billing 3 --dry-run"
    )]
    Feature(FeatureArgs),

    /// Add numbered components to a feature.
    #[command(
        name = "generate:feature-components",
        about = "Generate components inside a feature"
    )]
    FeatureComponents(FeatureComponentsArgs),

    /// Generate a Django REST app for a model.
    #[command(
        name = "generate:model",
        about = "Generate a Django REST model app",
        after_help = "FIELD TYPES:\n\
            \x20 char, text, int, bool, date, datetime, decimal, fk=<Model>"
    )]
    Model(ModelArgs),

    /// Generate shared project utilities (scroll-to-top, public routes).
    #[command(name = "generate:init", about = "Generate project utilities")]
    Utilities(UtilitiesArgs),

    /// List available templates.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 sygen list\n\
            \x20 sygen list --format json"
    )]
    List(ListArgs),

    /// Initialise a Sygen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 sygen init           # default location\n\
            \x20 sygen init --local   # .sygen.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 sygen completions bash > ~/.local/share/bash-completion/completions/sygen\n\
            \x20 sygen completions zsh  > ~/.zfunc/_sygen\n\
            \x20 sygen completions fish > ~/.config/fish/completions/sygen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Sygen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 sygen config get paths.features_dir\n\
            \x20 sygen config list"
    )]
    Config(ConfigCommands),
}

// ── generate:* ────────────────────────────────────────────────────────────────

/// Flags shared by every `generate:*` command.
#[derive(Debug, Clone, Args)]
pub struct GenerateFlags {
    /// Preview the planned files without writing anything.
    #[arg(long = "dry-run", help = "Show what would be generated without writing")]
    pub dry_run: bool,
}

/// Arguments for `sygen generate:component`.
#[derive(Debug, Args)]
pub struct ComponentArgs {
    #[arg(value_name = "NAME", help = "Component name (any case)")]
    pub name: String,

    /// Template variant; defaults to `generate.component_variant`.
    #[arg(long = "variant", value_enum, help = "Component template variant")]
    pub variant: Option<VariantArg>,

    #[arg(long = "no-tests", help = "Skip the test file")]
    pub no_tests: bool,

    #[arg(long = "no-stories", help = "Skip the Storybook story")]
    pub no_stories: bool,

    #[command(flatten)]
    pub flags: GenerateFlags,
}

/// Arguments for `sygen generate:store`.
#[derive(Debug, Args)]
pub struct StoreArgs {
    #[arg(value_name = "NAME", help = "Store name")]
    pub name: String,

    #[command(flatten)]
    pub flags: GenerateFlags,
}

/// Arguments for `sygen generate:hook`.
#[derive(Debug, Args)]
pub struct HookArgs {
    /// Hook name; a leading `use` is optional.
    #[arg(value_name = "NAME", help = "Hook name")]
    pub name: String,

    #[arg(
        short = 'f',
        long = "feature",
        value_name = "FEATURE",
        help = "Place the hook inside this feature"
    )]
    pub feature: Option<String>,

    #[command(flatten)]
    pub flags: GenerateFlags,
}

/// Arguments for `sygen generate:feature`.
#[derive(Debug, Args)]
pub struct FeatureArgs {
    #[arg(value_name = "NAME", help = "Feature name")]
    pub name: String,

    #[arg(
        value_name = "COUNT",
        default_value_t = 1,
        help = "Number of components to generate"
    )]
    pub count: usize,

    #[command(flatten)]
    pub flags: GenerateFlags,
}

/// Arguments for `sygen generate:feature-components`.
#[derive(Debug, Args)]
pub struct FeatureComponentsArgs {
    #[arg(value_name = "FEATURE", help = "Feature name")]
    pub feature: String,

    #[arg(value_name = "COUNT", help = "Number of components to generate")]
    pub count: usize,

    #[command(flatten)]
    pub flags: GenerateFlags,
}

/// Arguments for `sygen generate:model`.
#[derive(Debug, Args)]
pub struct ModelArgs {
    #[arg(value_name = "NAME", help = "Model name")]
    pub name: String,

    /// Repeatable `name:type` field.
    #[arg(
        long = "field",
        value_name = "NAME:TYPE",
        help = "Model field, e.g. title:char (repeatable)"
    )]
    pub fields: Vec<String>,

    #[command(flatten)]
    pub flags: GenerateFlags,
}

/// Arguments for `sygen generate:init`.
#[derive(Debug, Args)]
pub struct UtilitiesArgs {
    #[command(flatten)]
    pub flags: GenerateFlags,
}

/// Component template variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    Basic,
    Full,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `sygen list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One id per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `sygen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.sygen.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `sygen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `sygen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `paths.features_dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
