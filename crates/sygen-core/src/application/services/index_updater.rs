//! Index Updater - merges exports into barrel (`index.ts`) files.
//!
//! The merge itself is pure ([`IndexFile::merge`]); this service only reads
//! the current file through the filesystem port and writes the result back
//! when something was appended.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    application::ports::Filesystem,
    domain::{IndexEntry, IndexFile, SkippedCollision},
    error::SygenResult,
};

/// What one index update did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateResult {
    pub index_path: PathBuf,
    /// The file did not exist before this update.
    pub created: bool,
    /// Exports appended, in request order.
    pub appended: Vec<IndexEntry>,
    /// Requested exports skipped because the name was already exported.
    pub collisions: Vec<SkippedCollision>,
    /// Every export in the file after the update.
    pub exports: Vec<IndexEntry>,
}

impl UpdateResult {
    pub fn changed(&self) -> bool {
        !self.appended.is_empty()
    }
}

pub struct IndexUpdater<'a> {
    fs: &'a dyn Filesystem,
}

impl<'a> IndexUpdater<'a> {
    pub fn new(fs: &'a dyn Filesystem) -> Self {
        Self { fs }
    }

    /// Add `new_entries` to the barrel at `index_path`.
    ///
    /// A missing file is treated as empty and created. Names that are
    /// already exported are skipped and listed in the result; the existing
    /// text is never rewritten.
    ///
    /// # Errors
    /// - `DomainError::IndexParse` if the existing file has a statement the
    ///   parser does not understand (nothing is written)
    /// - `ApplicationError::FilesystemError` on read/write failure
    pub fn update_index(
        &self,
        index_path: &Path,
        new_entries: &[IndexEntry],
    ) -> SygenResult<UpdateResult> {
        let existing = self.fs.read_file(index_path)?;
        let created = existing.is_none();

        let merge = IndexFile::merge(existing.as_deref().unwrap_or(""), new_entries)?;

        for skipped in &merge.collisions {
            warn!(
                index = %index_path.display(),
                name = %skipped.entry.exported_name,
                existing = %skipped.existing_source,
                "Export already present, skipping"
            );
        }

        if merge.changed() {
            if let Some(parent) = index_path.parent() {
                if !parent.as_os_str().is_empty() {
                    self.fs.create_dir_all(parent)?;
                }
            }
            self.fs.write_file(index_path, &merge.text)?;
            info!(
                index = %index_path.display(),
                added = merge.appended.len(),
                "Index updated"
            );
        } else {
            debug!(index = %index_path.display(), "Index unchanged");
        }

        Ok(UpdateResult {
            index_path: index_path.to_path_buf(),
            created: created && merge.changed(),
            appended: merge.appended,
            collisions: merge.collisions,
            exports: merge.exports,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::DomainError;
    use crate::error::SygenError;

    #[test]
    fn missing_index_is_created() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_file().returning(|_| Ok(None));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|_, content| content == "export { Button } from './Button';\n")
            .times(1)
            .returning(|_, _| Ok(()));

        let result = IndexUpdater::new(&fs)
            .update_index(
                Path::new("src/components/index.ts"),
                &[IndexEntry::named("Button", "./Button")],
            )
            .unwrap();

        assert!(result.created);
        assert_eq!(result.appended.len(), 1);
    }

    #[test]
    fn collision_is_skipped_and_existing_text_kept() {
        let existing = "export { Foo } from './a';\nexport { Bar } from './b';\n";
        let mut fs = MockFilesystem::new();
        fs.expect_read_file()
            .returning(move |_| Ok(Some(existing.to_string())));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(move |_, content| {
                content == format!("{existing}export {{ Baz }} from './d';\n")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let result = IndexUpdater::new(&fs)
            .update_index(
                Path::new("index.ts"),
                &[
                    IndexEntry::named("Foo", "./c"),
                    IndexEntry::named("Baz", "./d"),
                ],
            )
            .unwrap();

        assert_eq!(result.collisions.len(), 1);
        assert_eq!(result.collisions[0].existing_source, "./a");
        let names: Vec<_> = result.exports.iter().map(|e| e.exported_name.as_str()).collect();
        assert_eq!(names, ["Foo", "Bar", "Baz"]);
    }

    #[test]
    fn nothing_new_means_no_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_file()
            .returning(|_| Ok(Some("export { Foo } from './a';\n".into())));
        fs.expect_write_file().never();

        let result = IndexUpdater::new(&fs)
            .update_index(Path::new("index.ts"), &[IndexEntry::named("Foo", "./a")])
            .unwrap();

        assert!(!result.changed());
        assert!(!result.created);
    }

    #[test]
    fn unparseable_index_is_left_alone() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_file()
            .returning(|_| Ok(Some("const x = 1;\n".into())));
        fs.expect_write_file().never();

        let err = IndexUpdater::new(&fs)
            .update_index(Path::new("index.ts"), &[IndexEntry::named("Foo", "./a")])
            .unwrap_err();

        assert!(matches!(
            err,
            SygenError::Domain(DomainError::IndexParse { line: 1, .. })
        ));
    }
}
