//! `{{PLACEHOLDER}}` substitution for text templates.

use std::collections::HashMap;

use sygen_core::domain::{ValidatedName, naming};

/// Variables available to a named template.
///
/// | Placeholder | `"order item"` |
/// |-------------|----------------|
/// | `{{NAME}}` | `OrderItem` |
/// | `{{NAME_CAMEL}}` | `orderItem` |
/// | `{{NAME_LOWER}}` | `orderitem` |
/// | `{{NAME_KEBAB}}` | `order-item` |
/// | `{{NAME_SNAKE}}` | `order_item` |
/// | `{{NAME_PLURAL}}` | `OrderItems` |
#[derive(Debug, Clone, Default)]
pub struct Placeholders {
    variables: HashMap<String, String>,
}

impl Placeholders {
    pub fn for_name(name: &ValidatedName) -> Self {
        let mut variables = HashMap::new();
        variables.insert("NAME".to_string(), name.pascal().to_string());
        variables.insert("NAME_CAMEL".to_string(), name.camel().to_string());
        variables.insert("NAME_LOWER".to_string(), name.lower());
        variables.insert("NAME_KEBAB".to_string(), name.kebab().to_string());
        variables.insert("NAME_SNAKE".to_string(), name.snake().to_string());
        variables.insert("NAME_PLURAL".to_string(), naming::pluralize(name.pascal()));
        Self { variables }
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every known `{{KEY}}`. Unknown placeholders stay as written.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholders(name: &str) -> Placeholders {
        Placeholders::for_name(&ValidatedName::parse(name).unwrap())
    }

    #[test]
    fn all_name_variants() {
        let p = placeholders("order item");
        assert_eq!(
            p.render("{{NAME}} {{NAME_CAMEL}} {{NAME_LOWER}} {{NAME_KEBAB}} {{NAME_SNAKE}} {{NAME_PLURAL}}"),
            "OrderItem orderItem orderitem order-item order_item OrderItems"
        );
    }

    #[test]
    fn repeated_and_unknown_placeholders() {
        let p = placeholders("cart");
        assert_eq!(p.render("{{NAME}}{{NAME}}"), "CartCart");
        assert_eq!(p.render("{{UNKNOWN}}"), "{{UNKNOWN}}");
        assert_eq!(p.render("{{{NAME}}}"), "{Cart}");
    }

    #[test]
    fn custom_variables() {
        let p = placeholders("cart").with_variable("ROUTE", "/cart");
        assert_eq!(p.get("ROUTE"), Some("/cart"));
        assert_eq!(p.render("path: '{{ROUTE}}'"), "path: '/cart'");
    }
}
