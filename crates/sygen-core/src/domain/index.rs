//! Barrel (index) files: parsing existing exports and merging new ones.
//!
//! The merge is a pure transform `(existing_text, new_entries) -> IndexMerge`.
//! Existing text is kept byte-for-byte; new exports are only ever appended,
//! and a name that is already exported is skipped and reported, never
//! overwritten.
//!
//! ## Recognised statements
//!
//! Statements may span several lines while a `{ ... }` list is open.
//!
//! ```text
//! // comment                       /* block comment */
//! import './styles.css';            (side effects only, no bindings)
//! import { A, B as C } from './x';  import type { T } from './t';
//! import D from './d';              import * as NS from './ns';
//! export { A, default as B } from './x';
//! export type { T } from './t';
//! export * from './all';            export * as NS from './ns';
//! export { A, C };                  (names resolved through earlier imports)
//! ```
//!
//! Trailing `//` and `/* */` comments after a statement are ignored.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::error::DomainError;

/// One export of a barrel file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IndexEntry {
    pub exported_name: String,
    pub source_module_path: String,
    pub is_default: bool,
}

impl IndexEntry {
    /// `export { name } from 'source';`
    pub fn named(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            exported_name: name.into(),
            source_module_path: source.into(),
            is_default: false,
        }
    }

    /// `export { default as name } from 'source';`
    pub fn default_export(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            exported_name: name.into(),
            source_module_path: source.into(),
            is_default: true,
        }
    }

    /// Render this entry as a single export statement.
    pub fn to_statement(&self) -> String {
        if self.is_default {
            format!(
                "export {{ default as {} }} from '{}';",
                self.exported_name, self.source_module_path
            )
        } else {
            format!(
                "export {{ {} }} from '{}';",
                self.exported_name, self.source_module_path
            )
        }
    }
}

/// A new entry that was not written because its name is already exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedCollision {
    pub entry: IndexEntry,
    /// Where the name is already exported from.
    pub existing_source: String,
}

/// Result of merging new entries into an index file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexMerge {
    /// Full text to write back.
    pub text: String,
    /// Every export after the merge, original entries first.
    pub exports: Vec<IndexEntry>,
    /// Entries that were appended, in request order.
    pub appended: Vec<IndexEntry>,
    /// Entries that were skipped because the name already existed.
    pub collisions: Vec<SkippedCollision>,
}

impl IndexMerge {
    pub fn changed(&self) -> bool {
        !self.appended.is_empty()
    }
}

/// Parsed view of an existing barrel file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexFile {
    exports: Vec<IndexEntry>,
    by_name: HashMap<String, usize>,
    wildcards: Vec<String>,
}

impl IndexFile {
    /// Parse the export statements of a barrel file.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let mut file = Self::default();
        let mut imports: HashMap<String, (String, bool)> = HashMap::new();

        for (line, statement) in statements(text)? {
            file.apply(line, &statement, &mut imports)?;
        }

        Ok(file)
    }

    /// Merge `new_entries` into `text`, see the module docs for the policy.
    pub fn merge(text: &str, new_entries: &[IndexEntry]) -> Result<IndexMerge, DomainError> {
        let mut file = Self::parse(text)?;
        let mut appended = Vec::new();
        let mut collisions = Vec::new();

        for entry in new_entries {
            match file.get(&entry.exported_name) {
                Some(existing) => collisions.push(SkippedCollision {
                    entry: entry.clone(),
                    existing_source: existing.source_module_path.clone(),
                }),
                None => {
                    file.insert(entry.clone());
                    appended.push(entry.clone());
                }
            }
        }

        let mut out = text.to_string();
        if !appended.is_empty() && !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        for entry in &appended {
            out.push_str(&entry.to_statement());
            out.push('\n');
        }

        Ok(IndexMerge {
            text: out,
            exports: file.exports,
            appended,
            collisions,
        })
    }

    /// Exports in file order.
    pub fn exports(&self) -> &[IndexEntry] {
        &self.exports
    }

    /// Module paths re-exported wholesale with `export * from`.
    pub fn wildcards(&self) -> &[String] {
        &self.wildcards
    }

    pub fn get(&self, name: &str) -> Option<&IndexEntry> {
        self.by_name.get(name).map(|&i| &self.exports[i])
    }

    /// First export of a name wins.
    fn insert(&mut self, entry: IndexEntry) {
        if self.by_name.contains_key(&entry.exported_name) {
            return;
        }
        self.by_name
            .insert(entry.exported_name.clone(), self.exports.len());
        self.exports.push(entry);
    }

    fn apply(
        &mut self,
        line: usize,
        statement: &str,
        imports: &mut HashMap<String, (String, bool)>,
    ) -> Result<(), DomainError> {
        let fail = || DomainError::IndexParse {
            line,
            statement: statement.to_string(),
        };

        let body = statement.trim().trim_end_matches(';').trim_end();

        if let Some(rest) = body.strip_prefix("import ") {
            // side-effect import, e.g. `import './styles.css';`
            if unquote(rest.trim()).is_some() {
                return Ok(());
            }
            let rest = rest.strip_prefix("type ").unwrap_or(rest).trim();
            let (clause, source) = split_from(rest).ok_or_else(fail)?;
            for (local, is_default) in parse_import_clause(clause).ok_or_else(fail)? {
                imports.insert(local, (source.to_string(), is_default));
            }
            return Ok(());
        }

        let Some(rest) = body.strip_prefix("export ") else {
            return Err(fail());
        };
        let rest = rest.trim_start();

        if let Some(star) = rest.strip_prefix('*') {
            let (clause, source) = split_from(star).ok_or_else(fail)?;
            match clause.trim().strip_prefix("as ") {
                Some(alias) if is_identifier(alias.trim()) => {
                    self.insert(IndexEntry::named(alias.trim(), source));
                }
                Some(_) => return Err(fail()),
                None if clause.trim().is_empty() => self.wildcards.push(source.to_string()),
                None => return Err(fail()),
            }
            return Ok(());
        }

        let rest = rest.strip_prefix("type ").unwrap_or(rest).trim_start();
        if !rest.starts_with('{') {
            return Err(fail());
        }

        match split_from(rest) {
            Some((clause, source)) => {
                for spec in parse_brace_list(clause).ok_or_else(fail)? {
                    let entry = match (spec.imported.as_str(), spec.exported) {
                        ("default", exported) => IndexEntry::default_export(exported, source),
                        (_, exported) => IndexEntry::named(exported, source),
                    };
                    self.insert(entry);
                }
            }
            None => {
                for spec in parse_brace_list(rest).ok_or_else(fail)? {
                    let (source, is_default) = imports.get(&spec.imported).ok_or_else(fail)?;
                    self.insert(IndexEntry {
                        exported_name: spec.exported,
                        source_module_path: source.clone(),
                        is_default: *is_default,
                    });
                }
            }
        }

        Ok(())
    }
}

/// Split the text into `(first_line, statement)` pairs, skipping blank lines
/// and comments. A statement ends at the end of a line once its braces are
/// balanced.
fn statements(text: &str) -> Result<Vec<(usize, String)>, DomainError> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut start = 0;
    let mut depth: i32 = 0;
    let mut in_block_comment = false;

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let mut trimmed = raw.trim();

        if in_block_comment {
            match trimmed.find("*/") {
                Some(end) => {
                    in_block_comment = false;
                    trimmed = trimmed[end + 2..].trim();
                }
                None => continue,
            }
        }

        if current.is_empty() {
            if let Some(rest) = trimmed.strip_prefix("/*") {
                match rest.find("*/") {
                    Some(end) => trimmed = rest[end + 2..].trim(),
                    None => {
                        in_block_comment = true;
                        continue;
                    }
                }
            }
            if trimmed.is_empty() || trimmed.starts_with("//") {
                continue;
            }
            start = line;
        }

        let (code, opens_block) = strip_trailing_comment(trimmed);
        if opens_block {
            in_block_comment = true;
        }
        depth += code.matches('{').count() as i32;
        depth -= code.matches('}').count() as i32;
        if depth < 0 {
            return Err(DomainError::IndexParse {
                line,
                statement: trimmed.to_string(),
            });
        }

        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(code);

        if depth == 0 {
            out.push((start, std::mem::take(&mut current)));
        }
    }

    if !current.is_empty() {
        return Err(DomainError::IndexParse {
            line: start,
            statement: current,
        });
    }

    Ok(out)
}

/// Cut a trailing `// ...` or `/* ... */` off a line. The flag is set when a
/// block comment is left open at the end of the line.
fn strip_trailing_comment(line: &str) -> (&str, bool) {
    let mut quote = None;
    let mut chars = line.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') => quote = Some(c),
            (None, '/') => match chars.peek() {
                Some((_, '/')) => return (line[..pos].trim_end(), false),
                Some((_, '*')) => {
                    let code = line[..pos].trim_end();
                    return match line[pos + 2..].find("*/") {
                        Some(end) if line[pos + 2 + end + 2..].trim().is_empty() => (code, false),
                        // code after an inline comment is kept verbatim
                        Some(_) => (line, false),
                        None => (code, true),
                    };
                }
                _ => {}
            },
            (None, _) => {}
        }
    }

    (line, false)
}

/// Split `clause from 'source'` into the clause and the unquoted source.
fn split_from(s: &str) -> Option<(&str, &str)> {
    let pos = s.rfind(" from ")?;
    let source = unquote(s[pos + 6..].trim())?;
    Some((s[..pos].trim(), source))
}

fn unquote(s: &str) -> Option<&str> {
    let quote = s.chars().next().filter(|c| matches!(c, '\'' | '"'))?;
    let inner = s.strip_prefix(quote)?.strip_suffix(quote)?;
    (!inner.is_empty() && !inner.contains(quote)).then_some(inner)
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

struct ExportSpec {
    imported: String,
    exported: String,
}

/// Parse `{ A, B as C, default as D, type E }`.
fn parse_brace_list(s: &str) -> Option<Vec<ExportSpec>> {
    let inner = s.trim().strip_prefix('{')?.strip_suffix('}')?;
    let mut specs = Vec::new();

    for item in inner.split(',') {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }
        let item = item.strip_prefix("type ").unwrap_or(item).trim();
        let (imported, exported) = match item.split_once(" as ") {
            Some((a, b)) => (a.trim(), b.trim()),
            None => (item, item),
        };
        if !is_identifier(imported) || !is_identifier(exported) {
            return None;
        }
        specs.push(ExportSpec {
            imported: imported.to_string(),
            exported: exported.to_string(),
        });
    }

    Some(specs)
}

/// Parse the binding part of an import: `D`, `{ A, B as C }`, `* as NS`, or
/// `D, { A }`. Returns `(local_name, is_default)` pairs.
fn parse_import_clause(clause: &str) -> Option<Vec<(String, bool)>> {
    let clause = clause.trim();
    let mut bindings = Vec::new();

    let (default_part, rest) = match clause.find('{').or_else(|| clause.find('*')) {
        Some(0) => ("", clause),
        Some(pos) => (clause[..pos].trim().trim_end_matches(',').trim(), &clause[pos..]),
        None => (clause, ""),
    };

    if !default_part.is_empty() {
        if !is_identifier(default_part) {
            return None;
        }
        bindings.push((default_part.to_string(), true));
    }

    if let Some(ns) = rest.strip_prefix('*') {
        let alias = ns.trim().strip_prefix("as ")?.trim();
        if !is_identifier(alias) {
            return None;
        }
        bindings.push((alias.to_string(), false));
    } else if !rest.is_empty() {
        for spec in parse_brace_list(rest)? {
            bindings.push((spec.exported, spec.imported == "default"));
        }
    }

    (!bindings.is_empty()).then_some(bindings)
}
