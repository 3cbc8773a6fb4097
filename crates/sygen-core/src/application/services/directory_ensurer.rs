//! Directory Ensurer - idempotent directory creation.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{application::ports::Filesystem, error::SygenResult};

/// Creates directories on demand and remembers which ones it has handled,
/// so each directory is logged once per run no matter how many files land
/// in it.
pub struct DirectoryEnsurer<'a> {
    fs: &'a dyn Filesystem,
    seen: HashSet<PathBuf>,
}

impl<'a> DirectoryEnsurer<'a> {
    pub fn new(fs: &'a dyn Filesystem) -> Self {
        Self {
            fs,
            seen: HashSet::new(),
        }
    }

    /// Make sure `path` exists as a directory.
    ///
    /// Existing directories are left untouched. Any failure (permission
    /// denied, a file in the way) is returned and is fatal for the run.
    pub fn ensure_dir(&mut self, path: &Path) -> SygenResult<()> {
        if self.seen.contains(path) {
            return Ok(());
        }

        if self.fs.is_dir(path) {
            debug!(dir = %path.display(), "Directory exists");
        } else {
            self.fs.create_dir_all(path)?;
            info!(dir = %path.display(), "Created directory");
        }

        self.seen.insert(path.to_path_buf());
        Ok(())
    }

    /// Directories handled so far.
    pub fn ensured(&self) -> impl Iterator<Item = &Path> {
        self.seen.iter().map(PathBuf::as_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockFilesystem};

    #[test]
    fn creates_missing_directory_once() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().times(1).return_const(false);
        fs.expect_create_dir_all().times(1).returning(|_| Ok(()));

        let mut ensurer = DirectoryEnsurer::new(&fs);
        ensurer.ensure_dir(Path::new("src/features/billing")).unwrap();
        ensurer.ensure_dir(Path::new("src/features/billing")).unwrap();

        assert_eq!(ensurer.ensured().count(), 1);
    }

    #[test]
    fn existing_directory_is_not_recreated() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_create_dir_all().never();

        let mut ensurer = DirectoryEnsurer::new(&fs);
        ensurer.ensure_dir(Path::new("src")).unwrap();
    }

    #[test]
    fn failure_is_returned() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(false);
        fs.expect_create_dir_all().returning(|path| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into())
        });

        let mut ensurer = DirectoryEnsurer::new(&fs);
        let err = ensurer.ensure_dir(Path::new("locked")).unwrap_err();

        assert!(err.to_string().contains("permission denied"));
        assert_eq!(ensurer.ensured().count(), 0);
    }
}
