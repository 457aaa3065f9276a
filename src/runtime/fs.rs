//! File system operations (existence checks, listing, removal).

use anyhow::{Context, Result};
use log::trace;
use std::fs;
use std::path::Path;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn exists_impl(&self, path: &Path) -> bool {
        path.exists()
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn is_dir_impl(&self, path: &Path) -> bool {
        path.is_dir()
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn remove_file_impl(&self, path: &Path) -> Result<()> {
        fs::remove_file(path)
            .with_context(|| format!("Failed to remove file {}", path.display()))?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn list_files_impl(&self, dir: &Path) -> Result<Vec<String>> {
        let entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to read directory {}", dir.display()))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry =
                entry.with_context(|| format!("Failed to read directory {}", dir.display()))?;
            // is_dir follows symlinks and is false for a dangling one
            if entry.path().is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => files.push(name),
                Err(name) => trace!("Skipping non UTF-8 file name: {:?}", name),
            }
        }
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_real_runtime_file_ops() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("foo-1.0-1.tar.bz2");

        fs::write(&file_path, b"archive").unwrap();
        assert!(runtime.exists(&file_path));
        assert!(!runtime.is_dir(&file_path));
        assert!(runtime.is_dir(dir.path()));

        runtime.remove_file(&file_path).unwrap();
        assert!(!runtime.exists(&file_path));
    }

    #[test]
    fn test_real_runtime_remove_missing_file() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let missing = dir.path().join("gone-1.0-1.tar.bz2");

        let err = runtime.remove_file(&missing).unwrap_err();
        assert!(err.to_string().contains("gone-1.0-1.tar.bz2"));
    }

    #[test]
    fn test_real_runtime_remove_directory_fails() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();

        assert!(runtime.remove_file(&sub).is_err());
        assert!(runtime.exists(&sub));
    }

    #[test]
    fn test_list_files_skips_directories() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("gcc4")).unwrap();
        fs::write(dir.path().join("setup.ini"), b"").unwrap();
        fs::write(dir.path().join("foo-1.0-1.tar.bz2"), b"").unwrap();

        let mut files = runtime.list_files(dir.path()).unwrap();
        files.sort();
        assert_eq!(files, vec!["foo-1.0-1.tar.bz2", "setup.ini"]);
    }

    #[test]
    fn test_list_files_reads_current_contents() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let archive = dir.path().join("foo-1.0-1.tar.bz2");
        fs::write(&archive, b"").unwrap();
        assert_eq!(runtime.list_files(dir.path()).unwrap().len(), 1);

        runtime.remove_file(&archive).unwrap();
        assert!(runtime.list_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_list_files_missing_dir_is_error() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();

        let err = runtime.list_files(&dir.path().join("missing")).unwrap_err();
        assert!(err.to_string().contains("Failed to read directory"));
    }

    #[cfg(unix)]
    #[test]
    fn test_list_files_symlinks() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let target = tempdir().unwrap();
        std::os::unix::fs::symlink(target.path(), dir.path().join("linked")).unwrap();
        std::os::unix::fs::symlink(
            dir.path().join("nowhere"),
            dir.path().join("foo-1.0-1.tar.bz2"),
        )
        .unwrap();

        let files = runtime.list_files(dir.path()).unwrap();
        assert_eq!(files, vec!["foo-1.0-1.tar.bz2"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_remove_dangling_symlink() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let link = dir.path().join("foo-1.0-1.tar.bz2");
        std::os::unix::fs::symlink(dir.path().join("nowhere"), &link).unwrap();

        runtime.remove_file(&link).unwrap();
        assert!(fs::symlink_metadata(&link).is_err());
    }
}
