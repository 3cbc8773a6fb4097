//! Django REST framework app files for `generate:model`.

use sygen_core::domain::{ModelField, ValidatedName, naming};

use crate::renderer::Placeholders;

const MODELS: &str = r#"from django.db import models


class {{NAME}}(models.Model):
{{FIELDS}}
    created_at = models.DateTimeField(auto_now_add=True)
    updated_at = models.DateTimeField(auto_now=True)

    class Meta:
        ordering = ["-created_at"]
        verbose_name_plural = "{{VERBOSE_PLURAL}}"

    def __str__(self):
        return {{STR_EXPR}}
"#;

const SERIALIZERS: &str = r#"from rest_framework import serializers

from .models import {{NAME}}


class {{NAME}}Serializer(serializers.ModelSerializer):
    class Meta:
        model = {{NAME}}
        fields = {{FIELD_LIST}}
"#;

const URLS: &str = r#"from django.urls import path

from .views import {{NAME}}APIView, {{NAME}}DetailAPIView

urlpatterns = [
    path(
        "{{ROUTE}}/",
        {{NAME}}APIView.as_view(),
        name="{{ROUTE}}-list",
    ),
    path(
        "{{ROUTE}}/<int:pk>/",
        {{NAME}}DetailAPIView.as_view(),
        name="{{ROUTE}}-detail",
    ),
]
"#;

const VIEWS: &str = r#"from rest_framework import generics

from .models import {{NAME}}
from .serializers import {{NAME}}Serializer


class {{NAME}}APIView(generics.ListCreateAPIView):
    queryset = {{NAME}}.objects.all()
    serializer_class = {{NAME}}Serializer


class {{NAME}}DetailAPIView(generics.RetrieveUpdateDestroyAPIView):
    queryset = {{NAME}}.objects.all()
    serializer_class = {{NAME}}Serializer
"#;

fn placeholders(name: &ValidatedName) -> Placeholders {
    Placeholders::for_name(name).with_variable("ROUTE", naming::pluralize(&name.lower()))
}

pub fn models(name: &ValidatedName, fields: &[ModelField]) -> String {
    let body: Vec<String> = fields
        .iter()
        .map(|f| format!("    {} = {}", f.name, f.ty.django_field()))
        .collect();

    // first char field reads best in the admin
    let str_expr = fields
        .iter()
        .find(|f| matches!(f.ty, sygen_core::domain::FieldType::Char))
        .map(|f| format!("self.{}", f.name))
        .unwrap_or_else(|| format!("f\"{} {{self.pk}}\"", name.pascal()));

    let verbose = naming::pluralize(&naming::split_words(name.raw()).join(" "));

    placeholders(name)
        .with_variable("FIELDS", body.join("\n"))
        .with_variable("VERBOSE_PLURAL", verbose)
        .with_variable("STR_EXPR", str_expr)
        .render(MODELS)
        .replace("(models.Model):\n\n", "(models.Model):\n")
}

pub fn serializers(name: &ValidatedName, fields: &[ModelField]) -> String {
    let field_list = if fields.is_empty() {
        "\"__all__\"".to_string()
    } else {
        let names: Vec<String> = std::iter::once("id")
            .chain(fields.iter().map(|f| f.name.as_str()))
            .chain(["created_at", "updated_at"])
            .map(|n| format!("\"{n}\""))
            .collect();
        format!("[{}]", names.join(", "))
    };

    placeholders(name)
        .with_variable("FIELD_LIST", field_list)
        .render(SERIALIZERS)
}

pub fn urls(name: &ValidatedName, _fields: &[ModelField]) -> String {
    placeholders(name).render(URLS)
}

pub fn views(name: &ValidatedName, _fields: &[ModelField]) -> String {
    placeholders(name).render(VIEWS)
}
