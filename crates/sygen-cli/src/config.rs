//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the resolved
//! [`ProjectLayout`] and [`ComponentOptions`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--root`, `--variant`, ...; handled at the call-site)
//! 2. Environment variables, `SYGEN_` prefix, `__` between sections
//!    (`SYGEN_PATHS__FEATURES_DIR=app/features`)
//! 3. Config file: `--config FILE`, else `./.sygen.toml`, else the platform
//!    config dir
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use sygen_core::domain::{ComponentOptions, ComponentVariant, ProjectLayout};

use crate::cli::global::OutputFormat;
use crate::error::{CliError, CliResult};

/// Name of the per-project config file.
pub const LOCAL_CONFIG_FILE: &str = ".sygen.toml";

const ENV_PREFIX: &str = "SYGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where generated files go.
    pub paths: PathsConfig,
    /// Defaults for `generate:*` commands.
    pub generate: GenerateConfig,
    /// Output settings.
    pub output: OutputConfig,
}

/// Project directories, relative to `root`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    pub root: PathBuf,
    pub src_dir: PathBuf,
    pub features_dir: PathBuf,
    pub components_dir: PathBuf,
    pub hooks_dir: PathBuf,
    pub stores_dir: PathBuf,
    pub api_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    pub component_variant: VariantSetting,
    pub with_tests: bool,
    pub with_stories: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantSetting {
    #[default]
    Basic,
    Full,
}

impl From<VariantSetting> for ComponentVariant {
    fn from(value: VariantSetting) -> Self {
        match value {
            VariantSetting::Basic => ComponentVariant::Basic,
            VariantSetting::Full => ComponentVariant::Full,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Used when `--output-format` is left at `auto`.
    pub format: OutputFormat,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            src_dir: PathBuf::from("src"),
            features_dir: PathBuf::from("src/features"),
            components_dir: PathBuf::from("src/components"),
            hooks_dir: PathBuf::from("src/hooks"),
            stores_dir: PathBuf::from("src/stores"),
            api_dir: PathBuf::from("api"),
        }
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            component_variant: VariantSetting::Basic,
            with_tests: true,
            with_stories: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: OutputFormat::Auto,
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the active file, then `SYGEN_*`
    /// environment variables.
    ///
    /// An explicit `config_file` must exist; the fallback locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (Some(path.clone()), true),
            None => (Self::active_path(), false),
        };
        Self::load_from(path.as_deref(), required)
    }

    fn load_from(path: Option<&Path>, required: bool) -> anyhow::Result<Self> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&Self::default()).context("Failed to encode built-in defaults")?,
        );

        if let Some(path) = path {
            tracing::debug!(path = %path.display(), "Reading configuration file");
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            );
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// The first config file that exists: `./.sygen.toml`, then the
    /// platform config file.
    pub fn active_path() -> Option<PathBuf> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }
        let global = Self::config_path();
        global.is_file().then_some(global)
    }

    /// Path to the default (global) configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.sygen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "sygen", "sygen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Resolve the configured directories into a [`ProjectLayout`].
    ///
    /// `root` (from `--root`) replaces `paths.root`.
    pub fn layout(&self, root: Option<&Path>) -> CliResult<ProjectLayout> {
        let paths = &self.paths;
        let root = root.unwrap_or(paths.root.as_path());

        ProjectLayout::new(root)
            .with_src_dir(&paths.src_dir)
            .and_then(|l| l.with_features_dir(&paths.features_dir))
            .and_then(|l| l.with_components_dir(&paths.components_dir))
            .and_then(|l| l.with_hooks_dir(&paths.hooks_dir))
            .and_then(|l| l.with_stores_dir(&paths.stores_dir))
            .and_then(|l| l.with_api_dir(&paths.api_dir))
            .map_err(|e| CliError::ConfigError {
                message: format!("paths: {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// Component defaults from the `generate` section.
    pub fn component_options(&self) -> ComponentOptions {
        ComponentOptions {
            variant: self.generate.component_variant.into(),
            with_tests: self.generate.with_tests,
            with_stories: self.generate.with_stories,
        }
    }

    /// Look up a dotted key such as `paths.features_dir`.
    pub fn get(&self, key: &str) -> CliResult<String> {
        let tree = serde_json::to_value(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to encode config: {e}"),
            source: Some(Box::new(e)),
        })?;

        let pointer = format!("/{}", key.replace('.', "/"));
        match tree.pointer(&pointer) {
            Some(serde_json::Value::String(s)) => Ok(s.clone()),
            Some(value) if !value.is_object() => Ok(value.to_string()),
            _ => Err(CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            }),
        }
    }
}
