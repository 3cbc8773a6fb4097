//! Where generated files go.
//!
//! The CLI builds a [`ProjectLayout`] from configuration; every generator
//! resolves its directories through it so no path is hard-coded twice.

use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// Resolved project directories. All sub-paths are relative to `root`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    src_dir: PathBuf,
    features_dir: PathBuf,
    components_dir: PathBuf,
    hooks_dir: PathBuf,
    stores_dir: PathBuf,
    api_dir: PathBuf,
}

impl ProjectLayout {
    /// Layout with the conventional React project directories.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            src_dir: PathBuf::from("src"),
            features_dir: PathBuf::from("src/features"),
            components_dir: PathBuf::from("src/components"),
            hooks_dir: PathBuf::from("src/hooks"),
            stores_dir: PathBuf::from("src/stores"),
            api_dir: PathBuf::from("api"),
        }
    }

    pub fn with_src_dir(mut self, dir: impl Into<PathBuf>) -> Result<Self, DomainError> {
        self.src_dir = relative(dir.into())?;
        Ok(self)
    }

    pub fn with_features_dir(mut self, dir: impl Into<PathBuf>) -> Result<Self, DomainError> {
        self.features_dir = relative(dir.into())?;
        Ok(self)
    }

    pub fn with_components_dir(mut self, dir: impl Into<PathBuf>) -> Result<Self, DomainError> {
        self.components_dir = relative(dir.into())?;
        Ok(self)
    }

    pub fn with_hooks_dir(mut self, dir: impl Into<PathBuf>) -> Result<Self, DomainError> {
        self.hooks_dir = relative(dir.into())?;
        Ok(self)
    }

    pub fn with_stores_dir(mut self, dir: impl Into<PathBuf>) -> Result<Self, DomainError> {
        self.stores_dir = relative(dir.into())?;
        Ok(self)
    }

    pub fn with_api_dir(mut self, dir: impl Into<PathBuf>) -> Result<Self, DomainError> {
        self.api_dir = relative(dir.into())?;
        Ok(self)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn src(&self) -> PathBuf {
        self.root.join(&self.src_dir)
    }

    pub fn features(&self) -> PathBuf {
        self.root.join(&self.features_dir)
    }

    /// `<features>/<feature>`
    pub fn feature(&self, kebab_name: &str) -> PathBuf {
        self.features().join(kebab_name)
    }

    pub fn components(&self) -> PathBuf {
        self.root.join(&self.components_dir)
    }

    pub fn hooks(&self) -> PathBuf {
        self.root.join(&self.hooks_dir)
    }

    pub fn stores(&self) -> PathBuf {
        self.root.join(&self.stores_dir)
    }

    pub fn api(&self) -> PathBuf {
        self.root.join(&self.api_dir)
    }
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self::new(".")
    }
}

fn relative(path: PathBuf) -> Result<PathBuf, DomainError> {
    if path.is_absolute() {
        Err(DomainError::AbsolutePathNotAllowed {
            path: path.display().to_string(),
        })
    } else {
        Ok(path)
    }
}
