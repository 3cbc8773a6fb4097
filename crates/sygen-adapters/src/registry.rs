//! Template catalogue - the built-in [`TemplateRegistry`].
//!
//! The catalogue is assembled once, on first use, and never changes after
//! that. Tests can build their own with [`TemplateCatalogue::builder`].

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::Serialize;
use tracing::warn;

use sygen_core::{
    application::{ApplicationError, ports::TemplateRegistry},
    domain::{
        DomainError, IndexEntry, ModelField, ParamShape, TaskKind, TemplateId, TemplateParams,
        ValidatedName, ids,
    },
    error::SygenResult,
};

use crate::{
    renderer::Placeholders,
    templates::{barrel, django, project, react},
};

static BUILTIN: LazyLock<TemplateCatalogue> = LazyLock::new(builtin);

type IndexFn = fn(&[IndexEntry]) -> String;
type ModelFn = fn(&ValidatedName, &[ModelField]) -> String;

#[derive(Clone, Copy)]
enum Body {
    /// Written verbatim.
    Fixed(&'static str),
    /// `{{PLACEHOLDER}}` text rendered against a name.
    Named(&'static str),
    Index(IndexFn),
    Model(ModelFn),
}

impl Body {
    fn shape(&self) -> ParamShape {
        match self {
            Self::Fixed(_) => ParamShape::Static,
            Self::Named(_) => ParamShape::Named,
            Self::Index(_) => ParamShape::Index,
            Self::Model(_) => ParamShape::Model,
        }
    }
}

/// Display information about one template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub id: TemplateId,
    pub shape: ParamShape,
    pub kind: TaskKind,
    pub description: &'static str,
}

#[derive(Clone, Copy)]
struct Entry {
    kind: TaskKind,
    description: &'static str,
    body: Body,
}

/// Read-only map from template id to template body.
#[derive(Clone, Default)]
pub struct TemplateCatalogue {
    entries: BTreeMap<TemplateId, Entry>,
}

impl TemplateCatalogue {
    /// The shared built-in catalogue.
    pub fn builtin() -> &'static TemplateCatalogue {
        &BUILTIN
    }

    pub fn builder() -> CatalogueBuilder {
        CatalogueBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every template, sorted by id.
    pub fn infos(&self) -> Vec<TemplateInfo> {
        self.entries
            .iter()
            .map(|(id, entry)| TemplateInfo {
                id: id.clone(),
                shape: entry.body.shape(),
                kind: entry.kind,
                description: entry.description,
            })
            .collect()
    }

    pub fn info(&self, id: &TemplateId) -> Option<TemplateInfo> {
        self.entries.get(id).map(|entry| TemplateInfo {
            id: id.clone(),
            shape: entry.body.shape(),
            kind: entry.kind,
            description: entry.description,
        })
    }
}

impl TemplateRegistry for TemplateCatalogue {
    fn shape_of(&self, id: &TemplateId) -> Option<ParamShape> {
        self.entries.get(id).map(|e| e.body.shape())
    }

    fn render(&self, id: &TemplateId, params: &TemplateParams) -> SygenResult<String> {
        let entry = self
            .entries
            .get(id)
            .ok_or_else(|| DomainError::UnknownTemplate { id: id.to_string() })?;

        params.check_shape(id, entry.body.shape())?;

        match (entry.body, params) {
            (Body::Fixed(text), TemplateParams::Static) => Ok(text.to_string()),
            (Body::Named(text), TemplateParams::Named { name }) => {
                Ok(Placeholders::for_name(name).render(text))
            }
            (Body::Index(build), TemplateParams::Index { entries }) => Ok(build(entries)),
            (Body::Model(build), TemplateParams::Model { name, fields }) => Ok(build(name, fields)),
            _ => Err(ApplicationError::RenderingFailed {
                template_id: id.to_string(),
                reason: "parameters do not match template body".into(),
            }
            .into()),
        }
    }

    fn ids(&self) -> Vec<TemplateId> {
        self.entries.keys().cloned().collect()
    }
}

impl TemplateRegistry for &'static TemplateCatalogue {
    fn shape_of(&self, id: &TemplateId) -> Option<ParamShape> {
        (**self).shape_of(id)
    }

    fn render(&self, id: &TemplateId, params: &TemplateParams) -> SygenResult<String> {
        (**self).render(id, params)
    }

    fn ids(&self) -> Vec<TemplateId> {
        (**self).ids()
    }
}

/// Collects templates before the catalogue is frozen.
#[derive(Default)]
pub struct CatalogueBuilder {
    entries: BTreeMap<TemplateId, Entry>,
}

impl CatalogueBuilder {
    /// A template written verbatim.
    pub fn fixed(
        self,
        id: &str,
        kind: TaskKind,
        description: &'static str,
        text: &'static str,
    ) -> Self {
        self.insert(id, kind, description, Body::Fixed(text))
    }

    /// A `{{PLACEHOLDER}}` template rendered against a name.
    pub fn named(
        self,
        id: &str,
        kind: TaskKind,
        description: &'static str,
        text: &'static str,
    ) -> Self {
        self.insert(id, kind, description, Body::Named(text))
    }

    pub fn index(
        self,
        id: &str,
        kind: TaskKind,
        description: &'static str,
        build: IndexFn,
    ) -> Self {
        self.insert(id, kind, description, Body::Index(build))
    }

    pub fn model(
        self,
        id: &str,
        kind: TaskKind,
        description: &'static str,
        build: ModelFn,
    ) -> Self {
        self.insert(id, kind, description, Body::Model(build))
    }

    pub fn build(self) -> TemplateCatalogue {
        TemplateCatalogue {
            entries: self.entries,
        }
    }

    fn insert(mut self, id: &str, kind: TaskKind, description: &'static str, body: Body) -> Self {
        let entry = Entry {
            kind,
            description,
            body,
        };
        if self.entries.insert(TemplateId::new(id), entry).is_some() {
            warn!(template = id, "Template registered twice, keeping the last one");
        }
        self
    }
}

#[rustfmt::skip]
fn builtin() -> TemplateCatalogue {
    use TaskKind::*;

    TemplateCatalogue::builder()
        .named(ids::COMPONENT_BASIC, Component, "Functional React component", react::COMPONENT_BASIC)
        .named(ids::COMPONENT_FULL, Component, "Component with props and local state", react::COMPONENT_FULL)
        .named(ids::COMPONENT_TEST, Test, "Vitest + Testing Library test", react::COMPONENT_TEST)
        .named(ids::COMPONENT_STORYBOOK, Story, "Storybook story", react::COMPONENT_STORYBOOK)
        .named(ids::APP_HOOK, Hook, "App-level state hook", react::APP_HOOK)
        .named(ids::FEATURE_HOOK, Hook, "Feature data-loading hook", react::FEATURE_HOOK)
        .named(ids::APP_STORE, Store, "Zustand store", react::APP_STORE)
        .named(ids::FEATURE_PAGE, Page, "Feature landing page", react::FEATURE_PAGE)
        .named(ids::FEATURE_ROUTES_INDIVIDUAL, Route, "Feature route table", react::FEATURE_ROUTES_INDIVIDUAL)
        .index(ids::FEATURE_ROUTES_SUITE, Route, "Routes barrel", barrel::barrel)
        .named(ids::INDEX_BASIC, Index, "Single component barrel", react::INDEX_BASIC)
        .index(ids::INDEX_SUITE, Index, "Barrel from a list of exports", barrel::barrel)
        .named(ids::INDEX_HOOK_INDIVIDUAL, Index, "Single hook barrel", react::INDEX_HOOK_INDIVIDUAL)
        .index(ids::INDEX_HOOK_SUITE, Index, "Hook barrel", barrel::barrel)
        .named(ids::INDEX_TYPES, Types, "Feature types module", react::INDEX_TYPES)
        .model(ids::MODEL_DJANGO, Model, "Django model", django::models)
        .model(ids::MODEL_SERIALIZERS, Serializer, "DRF model serializer", django::serializers)
        .model(ids::MODEL_URLS, Urls, "DRF list/detail routes", django::urls)
        .model(ids::MODEL_VIEWS, Views, "DRF generic API views", django::views)
        .fixed(ids::UTILS_SCROLL_TO_TOP, Util, "Scroll-to-top on navigation", project::SCROLL_TO_TOP)
        .fixed(ids::ROUTES_PUBLIC, Route, "Public route table", project::PUBLIC_ROUTES)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(s: &str) -> TemplateParams {
        TemplateParams::named(&ValidatedName::parse(s).unwrap())
    }

    #[test]
    fn builtin_has_every_catalogue_id() {
        let catalogue = TemplateCatalogue::builtin();
        assert_eq!(catalogue.len(), 21);
        assert_eq!(
            catalogue.shape_of(&TemplateId::new(ids::INDEX_SUITE)),
            Some(ParamShape::Index)
        );
        assert_eq!(
            catalogue.shape_of(&TemplateId::new(ids::ROUTES_PUBLIC)),
            Some(ParamShape::Static)
        );
        assert_eq!(catalogue.shape_of(&TemplateId::new("nope")), None);
    }

    #[test]
    fn ids_are_sorted() {
        let ids = TemplateCatalogue::builtin().ids();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn rendering_is_deterministic() {
        let catalogue = TemplateCatalogue::builtin();
        let id = TemplateId::new(ids::COMPONENT_FULL);

        let first = catalogue.render(&id, &named("user card")).unwrap();
        let second = catalogue.render(&id, &named("user card")).unwrap();

        assert_eq!(first, second);
        assert!(first.contains("export const UserCard = "));
        assert!(first.contains("className=\"user-card\""));
        assert!(!first.contains("{{"));
    }

    #[test]
    fn index_basic_matches_barrel_syntax() {
        let text = TemplateCatalogue::builtin()
            .render(&TemplateId::new(ids::INDEX_BASIC), &named("button"))
            .unwrap();
        assert_eq!(text, "export { Button } from './Button';\n");
    }

    #[test]
    fn unknown_id_and_wrong_shape() {
        let catalogue = TemplateCatalogue::builtin();

        let err = catalogue
            .render(&TemplateId::new("nope"), &TemplateParams::Static)
            .unwrap_err();
        assert!(matches!(
            err.as_domain(),
            Some(DomainError::UnknownTemplate { .. })
        ));

        let err = catalogue
            .render(&TemplateId::new(ids::APP_STORE), &TemplateParams::Static)
            .unwrap_err();
        assert!(matches!(
            err.as_domain(),
            Some(DomainError::ParamsMismatch { .. })
        ));
    }

    #[test]
    fn every_named_template_fills_its_placeholders() {
        let catalogue = TemplateCatalogue::builtin();
        for info in catalogue.infos() {
            if info.shape != ParamShape::Named {
                continue;
            }
            let text = catalogue.render(&info.id, &named("order item")).unwrap();
            assert!(!text.contains("{{NAME"), "{} left a placeholder", info.id);
            assert!(text.ends_with('\n'), "{} should end with a newline", info.id);
        }
    }

    #[test]
    fn custom_catalogue() {
        let catalogue = TemplateCatalogue::builder()
            .named("greeting", TaskKind::Util, "test", "hi {{NAME}}")
            .named("greeting", TaskKind::Util, "test", "hello {{NAME}}")
            .build();

        assert_eq!(catalogue.len(), 1);
        assert_eq!(
            catalogue
                .render(&TemplateId::new("greeting"), &named("bob"))
                .unwrap(),
            "hello Bob"
        );
        assert_eq!(catalogue.info(&TemplateId::new("greeting")).unwrap().kind, TaskKind::Util);
    }
}
