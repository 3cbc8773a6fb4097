//! Validated scaffold requests.
//!
//! The command layer turns raw arguments into one of these before any queue
//! work happens; everything inside is already validated and case-normalised.

use std::fmt;

use crate::domain::{error::DomainError, naming::ValidatedName, template::ModelField};

/// Upper bound on generated components per request.
pub const MAX_COMPONENT_COUNT: usize = 50;

/// A positive component count, at most [`MAX_COMPONENT_COUNT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentCount(usize);

impl ComponentCount {
    pub fn new(count: usize) -> Result<Self, DomainError> {
        if (1..=MAX_COMPONENT_COUNT).contains(&count) {
            Ok(Self(count))
        } else {
            Err(DomainError::InvalidCount {
                count,
                max: MAX_COMPONENT_COUNT,
            })
        }
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

/// Which component template to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComponentVariant {
    #[default]
    Basic,
    Full,
}

/// Optional companion files for a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentOptions {
    pub variant: ComponentVariant,
    pub with_tests: bool,
    pub with_stories: bool,
}

impl Default for ComponentOptions {
    fn default() -> Self {
        Self {
            variant: ComponentVariant::Basic,
            with_tests: true,
            with_stories: true,
        }
    }
}

/// One user request, resolved to a scaffold.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaffoldRequest {
    Component {
        name: ValidatedName,
        options: ComponentOptions,
    },
    Store {
        name: ValidatedName,
    },
    Hook {
        name: ValidatedName,
        feature: Option<ValidatedName>,
    },
    Feature {
        name: ValidatedName,
        component_count: ComponentCount,
    },
    FeatureComponents {
        feature: ValidatedName,
        component_count: ComponentCount,
    },
    Model {
        name: ValidatedName,
        fields: Vec<ModelField>,
    },
    Init,
}

impl ScaffoldRequest {
    /// Short label for logs and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Component { .. } => "component",
            Self::Store { .. } => "store",
            Self::Hook { .. } => "hook",
            Self::Feature { .. } => "feature",
            Self::FeatureComponents { .. } => "feature-components",
            Self::Model { .. } => "model",
            Self::Init => "init",
        }
    }
}

impl fmt::Display for ScaffoldRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Component { name, .. }
            | Self::Store { name }
            | Self::Hook { name, .. }
            | Self::Feature { name, .. }
            | Self::Model { name, .. } => write!(f, "{} '{}'", self.label(), name),
            Self::FeatureComponents {
                feature,
                component_count,
            } => write!(
                f,
                "{} components for feature '{}'",
                component_count.get(),
                feature
            ),
            Self::Init => f.write_str("project utilities"),
        }
    }
}
