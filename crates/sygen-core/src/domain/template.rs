//! Template identity and typed render parameters.
//!
//! ## Structure
//!
//! ```text
//! TemplateId ──► registry lookup ──► declared ParamShape
//!                                          │
//! TemplateParams (tagged union) ──shape()──┘  compared at enqueue time
//! ```
//!
//! A template is a pure function `TemplateParams -> String`. The domain only
//! knows ids and parameter shapes; the functions themselves live in the
//! adapters crate behind the `TemplateRegistry` port.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::{error::DomainError, index::IndexEntry, naming::ValidatedName};

/// Identifiers of the built-in template catalogue.
pub mod ids {
    pub const COMPONENT_BASIC: &str = "component-basic";
    pub const COMPONENT_FULL: &str = "component-full";
    pub const COMPONENT_TEST: &str = "component-test";
    pub const COMPONENT_STORYBOOK: &str = "component-storybook";
    pub const APP_HOOK: &str = "app-hook";
    pub const FEATURE_HOOK: &str = "feature-hook";
    pub const APP_STORE: &str = "app-store";
    pub const FEATURE_PAGE: &str = "feature-page";
    pub const FEATURE_ROUTES_INDIVIDUAL: &str = "feature-routes-individual";
    pub const FEATURE_ROUTES_SUITE: &str = "feature-routes-suite";
    pub const INDEX_BASIC: &str = "index-basic";
    pub const INDEX_SUITE: &str = "index-suite";
    pub const INDEX_HOOK_INDIVIDUAL: &str = "index-hook-individual";
    pub const INDEX_HOOK_SUITE: &str = "index-hook-suite";
    pub const INDEX_TYPES: &str = "index-types";
    pub const MODEL_DJANGO: &str = "model-django";
    pub const MODEL_SERIALIZERS: &str = "model-serializers";
    pub const MODEL_URLS: &str = "model-urls";
    pub const MODEL_VIEWS: &str = "model-views";
    pub const UTILS_SCROLL_TO_TOP: &str = "utils-scroll-to-top";
    pub const ROUTES_PUBLIC: &str = "routes-public";
}

/// Identifier into the template registry, e.g. `component-basic`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TemplateId(String);

impl TemplateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TemplateId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// The parameter shape a template declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamShape {
    Static,
    Named,
    Index,
    Model,
}

impl ParamShape {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Named => "named",
            Self::Index => "index",
            Self::Model => "model",
        }
    }
}

impl fmt::Display for ParamShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render parameters, one variant per shape.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateParams {
    /// Fixed text, nothing to substitute.
    Static,
    /// A single validated name.
    Named { name: ValidatedName },
    /// A barrel built from an ordered list of exports.
    Index { entries: Vec<IndexEntry> },
    /// A backend model and its fields.
    Model {
        name: ValidatedName,
        fields: Vec<ModelField>,
    },
}

impl TemplateParams {
    pub fn named(name: &ValidatedName) -> Self {
        Self::Named { name: name.clone() }
    }

    pub const fn shape(&self) -> ParamShape {
        match self {
            Self::Static => ParamShape::Static,
            Self::Named { .. } => ParamShape::Named,
            Self::Index { .. } => ParamShape::Index,
            Self::Model { .. } => ParamShape::Model,
        }
    }

    /// Check these params against the shape a template declares.
    pub fn check_shape(&self, id: &TemplateId, expected: ParamShape) -> Result<(), DomainError> {
        if self.shape() == expected {
            Ok(())
        } else {
            Err(DomainError::ParamsMismatch {
                template_id: id.to_string(),
                expected: expected.as_str(),
                found: self.shape().as_str(),
            })
        }
    }
}

/// Column type of a generated model field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Char,
    Text,
    Integer,
    Boolean,
    Date,
    DateTime,
    Decimal,
    /// Foreign key to another model, by PascalCase name.
    ForeignKey(String),
}

impl FieldType {
    /// Django field constructor for this type.
    pub fn django_field(&self) -> String {
        match self {
            Self::Char => "models.CharField(max_length=255)".into(),
            Self::Text => "models.TextField(blank=True)".into(),
            Self::Integer => "models.IntegerField(default=0)".into(),
            Self::Boolean => "models.BooleanField(default=False)".into(),
            Self::Date => "models.DateField(null=True, blank=True)".into(),
            Self::DateTime => "models.DateTimeField(auto_now_add=True)".into(),
            Self::Decimal => "models.DecimalField(max_digits=10, decimal_places=2)".into(),
            Self::ForeignKey(target) => {
                format!("models.ForeignKey('{target}', on_delete=models.CASCADE)")
            }
        }
    }
}

/// One `name:type` field of a model scaffold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelField {
    pub name: String,
    pub ty: FieldType,
}

impl FromStr for ModelField {
    type Err = DomainError;

    /// Parse `title:char`, `price:decimal` or `owner:fk=User`.
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| DomainError::InvalidField {
            spec: spec.to_string(),
            reason: reason.to_string(),
        };

        let (name, ty) = spec
            .split_once(':')
            .ok_or_else(|| invalid("expected name:type"))?;

        let name = name.trim();
        if name.is_empty()
            || !name.starts_with(|c: char| c.is_ascii_lowercase())
            || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(invalid("field names must be lowercase snake_case"));
        }

        let ty = match ty.trim().to_ascii_lowercase().as_str() {
            "char" | "string" => FieldType::Char,
            "text" => FieldType::Text,
            "int" | "integer" => FieldType::Integer,
            "bool" | "boolean" => FieldType::Boolean,
            "date" => FieldType::Date,
            "datetime" => FieldType::DateTime,
            "decimal" => FieldType::Decimal,
            other => match other.strip_prefix("fk=") {
                Some(target) if !target.is_empty() => {
                    // keep the user's casing for the referenced model
                    let original = &ty.trim()[3..];
                    FieldType::ForeignKey(crate::domain::naming::to_pascal_case(original))
                }
                _ => return Err(invalid(&format!("unknown type '{}'", ty.trim()))),
            },
        };

        Ok(Self {
            name: name.to_string(),
            ty,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_report_their_shape() {
        let name = ValidatedName::parse("billing").unwrap();
        assert_eq!(TemplateParams::Static.shape(), ParamShape::Static);
        assert_eq!(TemplateParams::named(&name).shape(), ParamShape::Named);
        assert_eq!(
            TemplateParams::Index { entries: vec![] }.shape(),
            ParamShape::Index
        );
    }

    #[test]
    fn shape_mismatch_is_reported() {
        let id = TemplateId::new(ids::INDEX_SUITE);
        let err = TemplateParams::Static
            .check_shape(&id, ParamShape::Index)
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::ParamsMismatch {
                template_id: "index-suite".into(),
                expected: "index",
                found: "static",
            }
        );
    }

    #[test]
    fn model_field_parsing() {
        let field: ModelField = "title:char".parse().unwrap();
        assert_eq!(field.ty, FieldType::Char);

        let fk: ModelField = "owner:fk=user".parse().unwrap();
        assert_eq!(fk.ty, FieldType::ForeignKey("User".into()));

        assert!("title".parse::<ModelField>().is_err());
        assert!("Title:char".parse::<ModelField>().is_err());
        assert!("title:blob".parse::<ModelField>().is_err());
        assert!("owner:fk=".parse::<ModelField>().is_err());
    }

    #[test]
    fn foreign_key_renders_django_field() {
        let ty = FieldType::ForeignKey("Invoice".into());
        assert_eq!(
            ty.django_field(),
            "models.ForeignKey('Invoice', on_delete=models.CASCADE)"
        );
    }
}
