//! Barrel (`index.ts`) bodies built from export lists.

use sygen_core::domain::IndexEntry;

/// One export statement per entry, in order.
pub fn barrel(entries: &[IndexEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&entry.to_statement());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_entry() {
        let text = barrel(&[
            IndexEntry::named("A", "./A"),
            IndexEntry::default_export("B", "./B"),
        ]);
        assert_eq!(
            text,
            "export { A } from './A';\nexport { default as B } from './B';\n"
        );
    }

    #[test]
    fn empty_barrel_is_empty() {
        assert_eq!(barrel(&[]), "");
    }
}
