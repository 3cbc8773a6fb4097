//! A single queued file write.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::template::{TemplateId, TemplateParams};

/// Reporting category of a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Component,
    Test,
    Story,
    Hook,
    Store,
    Page,
    Route,
    Index,
    Types,
    Model,
    Serializer,
    Urls,
    Views,
    Util,
}

impl TaskKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Test => "test",
            Self::Story => "story",
            Self::Hook => "hook",
            Self::Store => "store",
            Self::Page => "page",
            Self::Route => "route",
            Self::Index => "index",
            Self::Types => "types",
            Self::Model => "model",
            Self::Serializer => "serializer",
            Self::Urls => "urls",
            Self::Views => "views",
            Self::Util => "util",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One file to be produced. Immutable once built; consumed by a flush.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationTask {
    target_path: PathBuf,
    template_id: TemplateId,
    params: TemplateParams,
    kind: TaskKind,
}

impl GenerationTask {
    pub fn new(
        target_path: impl Into<PathBuf>,
        template_id: impl Into<TemplateId>,
        params: TemplateParams,
        kind: TaskKind,
    ) -> Self {
        Self {
            target_path: target_path.into(),
            template_id: template_id.into(),
            params,
            kind,
        }
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    pub fn template_id(&self) -> &TemplateId {
        &self.template_id
    }

    pub fn params(&self) -> &TemplateParams {
        &self.params
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }
}
