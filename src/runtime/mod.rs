//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over the filesystem,
//! enabling dependency injection and testability.
//!
//! # Structure
//!
//! - `fs` - File system operations (existence checks, listing, removal)
//! - `walk` - Top-down directory traversal

mod fs;
mod walk;

use anyhow::Result;
use std::path::{Path, PathBuf};

#[cfg_attr(test, mockall::automock)]
pub trait Runtime {
    // File System
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
    fn remove_file(&self, path: &Path) -> Result<()>;

    /// Names of the entries of `dir` that are not directories, read at call time.
    /// Symlinks count as what they point to; dangling symlinks count as files.
    fn list_files(&self, dir: &Path) -> Result<Vec<String>>;

    /// Every directory under `root`, root first, parents before children.
    /// Symbolic links are followed. Unreadable subdirectories and symlink loops
    /// are skipped with a warning; an unreadable root is an error.
    fn walk_dirs(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.is_dir_impl(path)
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        self.remove_file_impl(path)
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<String>> {
        self.list_files_impl(dir)
    }

    fn walk_dirs(&self, root: &Path) -> Result<Vec<PathBuf>> {
        self.walk_dirs_impl(root)
    }
}
