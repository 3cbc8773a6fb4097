//! Name and path utilities shared by every generator.
//!
//! Everything in here is a pure string transform. The only fallible entry
//! point is [`ValidatedName::parse`], which the command layer calls before
//! anything is queued.

use std::fmt;
use std::path::{Component, Path};

use serde::Serialize;

use crate::domain::error::DomainError;

/// Upper bound on a user-supplied name, in characters.
pub const MAX_NAME_LEN: usize = 64;

/// Uppercase the first character, leaving the rest untouched.
///
/// `"billing"` → `"Billing"`, `"userProfile"` → `"UserProfile"`.
pub fn cap_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first character, leaving the rest untouched.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert a string to snake_case.
///
/// | Input | Output |
/// |-------|--------|
/// | "UserProfile" | "user_profile" |
/// | "user-profile" | "user_profile" |
/// | "HTTPRequest" | "http_request" |
pub fn to_snake_case(s: &str) -> String {
    split_words(s).join("_")
}

/// Convert a string to kebab-case. Used for directory names.
pub fn to_kebab_case(s: &str) -> String {
    split_words(s).join("-")
}

/// Convert a string to PascalCase. Used for component and type names.
///
/// | Input | Output |
/// |-------|--------|
/// | "billing" | "Billing" |
/// | "user-profile" | "UserProfile" |
/// | "HTTPRequest" | "HttpRequest" |
pub fn to_pascal_case(s: &str) -> String {
    split_words(s).iter().map(|w| cap_first(w)).collect()
}

/// Convert a string to camelCase. Used for store and variable names.
pub fn to_camel_case(s: &str) -> String {
    lower_first(&to_pascal_case(s))
}

/// Naive English pluralisation, good enough for model and route names.
///
/// - consonant + `y` → `ies` (`category` → `categories`)
/// - `s`, `x`, `z`, `ch`, `sh` → `+es` (`box` → `boxes`)
/// - otherwise `+s`
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_ascii_lowercase();
    if let Some(stem) = word.strip_suffix(['y', 'Y']) {
        let before = stem.chars().last();
        if before.is_some_and(|c| !"aeiouAEIOU".contains(c)) {
            return format!("{stem}ies");
        }
    }

    if ["s", "x", "z", "ch", "sh"].iter().any(|suffix| lower.ends_with(suffix)) {
        return format!("{word}es");
    }

    format!("{word}s")
}

/// Import specifier of `module` as seen from a barrel in `index_dir`.
///
/// Extensions are dropped and a trailing `/index` collapses to its
/// directory, so `components/Button/index.ts` seen from `components` is
/// `./Button`. Returns `None` if `module` is not inside `index_dir`.
pub fn module_specifier(index_dir: &Path, module: &Path) -> Option<String> {
    let relative = module.strip_prefix(index_dir).ok()?;
    let mut parts: Vec<String> = relative
        .components()
        .map(|c| match c {
            Component::Normal(part) => part.to_str().map(str::to_string),
            _ => None,
        })
        .collect::<Option<_>>()?;

    let file = parts.pop()?;
    let stem = file.split('.').next().unwrap_or(&file).to_string();
    if stem != "index" || parts.is_empty() {
        parts.push(stem);
    }

    Some(format!("./{}", parts.join("/")))
}

/// Split a string into lowercase words based on casing and separators.
///
/// 1. `_`, `-`, whitespace always split
/// 2. `aB` splits between `a` and `B`
/// 3. `HTTPRequest` splits between `P` and `R` (upper, upper, lower)
pub fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(&next) = chars.peek() {
            if (c.is_lowercase() || c.is_ascii_digit()) && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}

/// A user-supplied name that passed validation, with its case variants
/// computed once.
///
/// Invariant: non-empty, starts with an ASCII letter, contains only ASCII
/// alphanumerics, `-`, `_` or spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ValidatedName {
    raw: String,
    pascal: String,
    camel: String,
    kebab: String,
    snake: String,
}

impl ValidatedName {
    /// Validate and case-normalise a raw name.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let raw = input.trim();

        let invalid = |reason: &str| DomainError::InvalidName {
            name: input.to_string(),
            reason: reason.to_string(),
        };

        let Some(first) = raw.chars().next() else {
            return Err(invalid("name cannot be empty"));
        };
        if !first.is_ascii_alphabetic() {
            return Err(invalid("name must start with a letter"));
        }
        if raw.chars().count() > MAX_NAME_LEN {
            return Err(invalid("name is longer than 64 characters"));
        }
        if let Some(bad) = raw
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ' ')))
        {
            return Err(invalid(&format!("illegal character '{bad}'")));
        }

        Ok(Self {
            raw: raw.to_string(),
            pascal: to_pascal_case(raw),
            camel: to_camel_case(raw),
            kebab: to_kebab_case(raw),
            snake: to_snake_case(raw),
        })
    }

    /// The trimmed input as typed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// `UserProfile`
    pub fn pascal(&self) -> &str {
        &self.pascal
    }

    /// `userProfile`
    pub fn camel(&self) -> &str {
        &self.camel
    }

    /// `user-profile`
    pub fn kebab(&self) -> &str {
        &self.kebab
    }

    /// `user_profile`
    pub fn snake(&self) -> &str {
        &self.snake
    }

    /// `userprofile`
    pub fn lower(&self) -> String {
        self.pascal.to_lowercase()
    }

    /// Derive a new name by appending a suffix to the PascalCase form,
    /// e.g. `Billing` + `Component1`.
    pub fn suffixed(&self, suffix: &str) -> Self {
        let joined = format!("{}{}", self.pascal, cap_first(suffix));
        Self {
            pascal: to_pascal_case(&joined),
            camel: to_camel_case(&joined),
            kebab: to_kebab_case(&joined),
            snake: to_snake_case(&joined),
            raw: joined,
        }
    }
}

impl fmt::Display for ValidatedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
